//! Directory tree walking for archive creation.
//!
//! The walk is depth-first with entries sorted by file name inside each
//! directory. Only regular files are yielded; directories are implied by the
//! paths of the files below them.

use crate::HostkitError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A regular file found under the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Entry name inside the archive: relative to the root, `/`-separated.
    pub archive_name: String,

    /// Size in bytes at walk time.
    pub size: u64,
}

/// Walks a directory tree and yields its regular files.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::creation::walker::FileWalker;
/// use std::path::Path;
///
/// let walker = FileWalker::new(Path::new("./project"));
/// for entry in walker.walk() {
///     let entry = entry.unwrap();
///     println!("Would add: {}", entry.archive_name);
/// }
/// ```
pub struct FileWalker<'a> {
    root: &'a Path,
    exclude: Option<PathBuf>,
}

impl<'a> FileWalker<'a> {
    /// Creates a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            exclude: None,
        }
    }

    /// Skips the file whose canonical path equals `path`.
    ///
    /// Used to keep an archive that is being written inside the walked tree
    /// from being added to itself.
    #[must_use]
    pub fn excluding(mut self, path: Option<PathBuf>) -> Self {
        self.exclude = path;
        self
    }

    /// Returns an iterator over the regular files below the root.
    ///
    /// Symbolic links and special files are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Items are `HostkitError::Io` if a directory cannot be read, metadata
    /// is unavailable, or a file name is not valid UTF-8.
    pub fn walk(&self) -> impl Iterator<Item = Result<WalkedFile>> + '_ {
        WalkDir::new(self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.build_entry(&entry).transpose(),
                Err(e) => Some(Err(walk_error(&e))),
            })
    }

    fn build_entry(&self, entry: &walkdir::DirEntry) -> Result<Option<WalkedFile>> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return Ok(None);
        }

        let path = entry.path();
        if !file_type.is_file() {
            tracing::warn!(path = %path.display(), "skipping non-regular file");
            return Ok(None);
        }

        if let Some(exclude) = &self.exclude
            && path.canonicalize().is_ok_and(|p| &p == exclude)
        {
            tracing::debug!(path = %path.display(), "skipping output archive");
            return Ok(None);
        }

        let metadata = entry.metadata().map_err(|e| walk_error(&e))?;
        let relative = path.strip_prefix(self.root).map_err(|_| {
            HostkitError::Io(std::io::Error::other(format!(
                "{} is not below {}",
                path.display(),
                self.root.display()
            )))
        })?;

        Ok(Some(WalkedFile {
            path: path.to_path_buf(),
            archive_name: archive_name(relative)?,
            size: metadata.len(),
        }))
    }
}

/// Collects every file of the walk up front.
///
/// Knowing the total lets progress reporting show `current/total`, and a
/// walk error surfaces before the first entry is written.
///
/// # Errors
///
/// Returns the first walk error.
pub fn collect_files(root: &Path, exclude: Option<PathBuf>) -> Result<Vec<WalkedFile>> {
    FileWalker::new(root).excluding(exclude).walk().collect()
}

/// Converts a relative path into a zip entry name.
///
/// Zip entry names use `/` between components no matter what the host
/// separator is.
///
/// # Errors
///
/// Returns `HostkitError::Io` if a component is not valid UTF-8 or the path
/// is not a plain relative path.
pub fn archive_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    HostkitError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("path is not valid UTF-8: {}", relative.display()),
                    ))
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(HostkitError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("not a relative entry path: {}", relative.display()),
                )));
            }
        }
    }

    Ok(parts.join("/"))
}

fn walk_error(err: &walkdir::Error) -> HostkitError {
    let kind = err
        .io_error()
        .map_or(std::io::ErrorKind::Other, std::io::Error::kind);
    let location = err
        .path()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default();

    HostkitError::Io(std::io::Error::new(
        kind,
        format!("failed to walk{location}: {err}"),
    ))
}
