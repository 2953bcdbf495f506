//! High-level archiving entry points.

use std::path::Path;

use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::CreationReport;
use crate::creation::zip_directory_with_progress;
use crate::creation::zip_file_with_progress;
use crate::error::io_error;

/// Zips `source` into `dest`, choosing the single-file or directory form.
///
/// A directory is archived with [`zip_directory`](crate::zip_directory);
/// anything else is handed to [`zip_file`](crate::zip_file). Symbolic links
/// are followed for this decision.
///
/// # Errors
///
/// Returns `HostkitError::Io` if `source` does not exist, plus everything
/// the chosen operation can return.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::zip_path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = zip_path("src", "src.zip")?;
/// println!("Added {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn zip_path<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<CreationReport> {
    zip_path_with_progress(source, dest, &mut NoopProgress)
}

/// Like [`zip_path`], reporting progress to `progress`.
///
/// # Errors
///
/// Same as [`zip_path`].
pub fn zip_path_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let source = source.as_ref();
    let metadata = std::fs::metadata(source).map_err(|e| io_error("open", source, &e))?;

    if metadata.is_dir() {
        zip_directory_with_progress(source, dest, progress)
    } else {
        zip_file_with_progress(source, dest, progress)
    }
}
