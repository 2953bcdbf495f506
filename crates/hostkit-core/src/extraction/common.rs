//! File and directory writers shared by the extraction path.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_progress;
use crate::error::io_error;
use crate::types::DestDir;
use crate::types::SafePath;

/// Mode applied when an entry has no usable stored permissions.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Picks the permission bits for an extracted file.
///
/// The stored mode is used when present and owner-writable. Anything else
/// falls back to [`DEFAULT_FILE_MODE`], so an archive cannot leave behind
/// files the extracting user cannot overwrite on the next run.
#[must_use]
pub fn effective_mode(stored: Option<u32>) -> u32 {
    match stored.map(|mode| mode & 0o777) {
        Some(mode) if mode & 0o200 != 0 => mode,
        _ => DEFAULT_FILE_MODE,
    }
}

/// Writes one file entry below `dest`.
///
/// Missing parent directories are created. An existing file is truncated.
///
/// # Errors
///
/// Returns `HostkitError::Io` if directory creation, file creation, the
/// copy, or setting permissions fails.
pub fn extract_file<R: Read>(
    reader: &mut R,
    safe_path: &SafePath,
    dest: &DestDir,
    mode: u32,
    report: &mut ExtractionReport,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let output_path = dest.join(safe_path);

    if let Some(parent) = output_path.parent() {
        create_dir_all(parent).map_err(|e| io_error("create directory", parent, &e))?;
    }

    let output = File::create(&output_path).map_err(|e| io_error("create", &output_path, &e))?;
    let mut writer = BufWriter::with_capacity(buffer.size(), output);
    let bytes = copy_with_progress(reader, &mut writer, buffer, progress)
        .map_err(|e| io_error("extract", &output_path, &e))?;
    writer
        .flush()
        .map_err(|e| io_error("write", &output_path, &e))?;

    set_mode(&output_path, mode)?;

    report.files_extracted += 1;
    report.bytes_written += bytes;
    Ok(())
}

/// Creates a directory entry below `dest`. Existing directories are fine.
///
/// # Errors
///
/// Returns `HostkitError::Io` if the directory cannot be created.
pub fn create_directory(
    safe_path: &SafePath,
    dest: &DestDir,
    report: &mut ExtractionReport,
) -> Result<()> {
    let dir_path = dest.join(safe_path);
    create_dir_all(&dir_path).map_err(|e| io_error("create directory", &dir_path, &e))?;
    report.directories_created += 1;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| io_error("set permissions on", path, &e))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
