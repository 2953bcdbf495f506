//! Test utilities for building in-memory ZIP archives.
//!
//! The builders write entry names verbatim, so they can produce archives a
//! well-behaved zipper never would (`../` names, absolute names).
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from `(name, content)` pairs.
///
/// Files are stored uncompressed with mode 0o644.
///
/// # Examples
///
/// ```
/// use hostkit_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", "hello"), ("dir/nested.txt", "world")]);
/// assert!(!zip_data.is_empty());
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (name, content)| {
            builder.add_file(name, content.as_bytes())
        })
        .build()
}

/// Builder for ZIP test archives with explicit modes and directory entries.
///
/// # Examples
///
/// ```
/// use hostkit_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("bin/")
///     .add_file_with_mode("bin/run.sh", b"#!/bin/sh\n", 0o755)
///     .add_file("../escape.txt", b"malicious")
///     .build();
/// ```
pub struct ZipTestBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored file entry with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a stored file entry with the given Unix mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(mode);
        self.writer.start_file(path, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a deflate-compressed file entry.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        self.writer.start_file(path, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry. The name should end with `/`.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.writer.add_directory(path, options).unwrap();
        self
    }

    /// Finishes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_create_test_zip() {
        let zip_data = create_test_zip(&[("file.txt", "hello")]);
        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 1);

        let mut content = String::new();
        archive
            .by_name("file.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_builder_keeps_names_verbatim() {
        let zip_data = ZipTestBuilder::new()
            .add_file("../escape.txt", b"x")
            .add_directory("dir/")
            .build();
        let archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        assert_eq!(names, vec!["../escape.txt", "dir/"]);
    }

    #[test]
    fn test_builder_mode() {
        let zip_data = ZipTestBuilder::new()
            .add_file_with_mode("run.sh", b"#!/bin/sh", 0o755)
            .build();
        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.unix_mode().unwrap() & 0o777, 0o755);
    }
}
