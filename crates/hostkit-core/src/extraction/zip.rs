//! ZIP archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use zip::ZipArchive;

use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::error::zip_error;
use crate::extraction::common::create_directory;
use crate::extraction::common::effective_mode;
use crate::extraction::common::extract_file;
use crate::types::DestDir;
use crate::types::SafePath;

/// Extracts a ZIP archive into `destination`.
///
/// The destination directory is created if it does not exist. Entries are
/// processed in archive order. Each entry name is validated against the
/// destination before anything is written for it; the first name that would
/// land outside the destination aborts the whole extraction with
/// `HostkitError::PathTraversal`. Entries already written before that point
/// are left in place.
///
/// Directory entries become directories. File entries are written with their
/// stored Unix mode, or 0o644 when the stored mode is missing or not
/// owner-writable. Existing files are overwritten.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::unzip;
///
/// let report = unzip("bundle.zip", "/tmp/bundle")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok::<(), hostkit_core::HostkitError>(())
/// ```
///
/// # Errors
///
/// - `HostkitError::PathTraversal` if an entry escapes `destination`
/// - `HostkitError::Io` if the archive cannot be opened or parsed, the
///   destination cannot be created, or an entry fails to decompress or write
pub fn unzip<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    destination: Q,
) -> Result<ExtractionReport> {
    unzip_with_progress(archive, destination, &mut NoopProgress)
}

/// Like [`unzip`], reporting progress to `progress`.
///
/// # Errors
///
/// Same as [`unzip`].
pub fn unzip_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    destination: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let archive_path = archive.as_ref();
    let start = Instant::now();

    let file = File::open(archive_path)
        .map_err(|e| crate::error::io_error("open", archive_path, &e))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| zip_error("read archive", archive_path, &e))?;

    let dest = DestDir::create(destination.as_ref())?;
    let mut report = ExtractionReport::new();
    let mut buffer = CopyBuffer::new();
    let total = archive.len();

    tracing::debug!(
        archive = %archive_path.display(),
        destination = %dest.as_path().display(),
        entries = total,
        "extracting"
    );

    for index in 0..total {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| zip_error("read entry of", archive_path, &e))?;

        let name = Path::new(entry.name()).to_path_buf();
        let safe_path = SafePath::validate(&name, &dest).inspect_err(|_| {
            tracing::warn!(entry = %name.display(), "rejected entry outside destination");
        })?;

        progress.on_entry_start(safe_path.as_path(), total, index + 1);

        if entry.is_dir() {
            create_directory(&safe_path, &dest, &mut report)?;
        } else {
            let mode = effective_mode(entry.unix_mode());
            extract_file(
                &mut entry,
                &safe_path,
                &dest,
                mode,
                &mut report,
                &mut buffer,
                progress,
            )?;
        }

        progress.on_entry_complete(safe_path.as_path());
    }

    report.duration = start.elapsed();
    progress.on_complete();

    tracing::info!(
        archive = %archive_path.display(),
        files = report.files_extracted,
        directories = report.directories_created,
        bytes = report.bytes_written,
        "unzipped archive"
    );
    Ok(report)
}
