//! ZIP archive creation.
//!
//! Every entry is deflate-compressed. Directory entries are never written:
//! a directory exists in the archive only through the files below it, so
//! empty directories do not survive a round trip.

use crate::HostkitError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_progress;
use crate::creation::report::CreationReport;
use crate::creation::walker::WalkedFile;
use crate::creation::walker::collect_files;
use crate::error::io_error;
use crate::error::zip_error;
use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Entries at or above this size need ZIP64 extensions.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Compresses a single file into a new archive at `dest`.
///
/// The archive holds exactly one entry named after the final component of
/// `source`. An existing file at `dest` is truncated and overwritten.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::zip_file;
///
/// let report = zip_file("notes.txt", "notes.zip")?;
/// assert_eq!(report.files_added, 1);
/// # Ok::<(), hostkit_core::HostkitError>(())
/// ```
///
/// # Errors
///
/// Returns `HostkitError::Io` if:
/// - `source` cannot be opened or is not a regular file
/// - `dest` cannot be created
/// - Reading or compressing fails partway (a partial archive may remain)
pub fn zip_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<CreationReport> {
    zip_file_with_progress(source, dest, &mut NoopProgress)
}

/// Like [`zip_file`], reporting progress to `progress`.
///
/// # Errors
///
/// Same as [`zip_file`].
pub fn zip_file_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    let start = Instant::now();

    let metadata = std::fs::metadata(source).map_err(|e| io_error("open", source, &e))?;
    if !metadata.is_file() {
        return Err(HostkitError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("not a regular file: {}", source.display()),
        )));
    }

    let archive_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            HostkitError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("source has no valid UTF-8 file name: {}", source.display()),
            ))
        })?;

    let entry = WalkedFile {
        path: source.to_path_buf(),
        archive_name: archive_name.to_string(),
        size: metadata.len(),
    };

    let output = File::create(dest).map_err(|e| io_error("create", dest, &e))?;
    let mut report = write_archive(output, dest, &[entry], progress)?;
    report.duration = start.elapsed();

    tracing::info!(
        source = %source.display(),
        archive = %dest.display(),
        bytes = report.bytes_written,
        "zipped file"
    );
    Ok(report)
}

/// Compresses every regular file below `source_dir` into a new archive.
///
/// Entry names are relative to `source_dir` and use `/` separators. Files
/// are added in depth-first order, sorted by name within each directory.
/// An existing file at `dest` is truncated and overwritten; if `dest` lies
/// inside `source_dir` it is not added to itself.
///
/// # Examples
///
/// ```no_run
/// use hostkit_core::zip_directory;
///
/// let report = zip_directory("project", "project.zip")?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), hostkit_core::HostkitError>(())
/// ```
///
/// # Errors
///
/// Returns `HostkitError::Io` if `source_dir` is not a readable directory,
/// `dest` cannot be created, or any file fails to read during the walk. The
/// operation stops at the first failure and a partial archive may remain.
pub fn zip_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    dest: Q,
) -> Result<CreationReport> {
    zip_directory_with_progress(source_dir, dest, &mut NoopProgress)
}

/// Like [`zip_directory`], reporting progress to `progress`.
///
/// # Errors
///
/// Same as [`zip_directory`].
pub fn zip_directory_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    dest: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let source_dir = source_dir.as_ref();
    let dest = dest.as_ref();
    let start = Instant::now();

    let metadata = std::fs::metadata(source_dir).map_err(|e| io_error("open", source_dir, &e))?;
    if !metadata.is_dir() {
        return Err(HostkitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("not a directory: {}", source_dir.display()),
        )));
    }

    let output = File::create(dest).map_err(|e| io_error("create", dest, &e))?;
    let exclude = dest.canonicalize().ok();

    let files = collect_files(source_dir, exclude)?;
    tracing::debug!(
        source = %source_dir.display(),
        files = files.len(),
        "collected files"
    );

    let mut report = write_archive(output, dest, &files, progress)?;
    report.duration = start.elapsed();

    tracing::info!(
        source = %source_dir.display(),
        archive = %dest.display(),
        files = report.files_added,
        bytes = report.bytes_written,
        "zipped directory"
    );
    Ok(report)
}

/// Writes `files` into a fresh archive and finalizes it.
///
/// `dest` is only used for error messages.
fn write_archive(
    output: File,
    dest: &Path,
    files: &[WalkedFile],
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let mut zip = ZipWriter::new(output);
    let mut report = CreationReport::new();
    let mut buffer = CopyBuffer::new();
    let total = files.len();

    for (idx, file) in files.iter().enumerate() {
        let name = Path::new(&file.archive_name);
        progress.on_entry_start(name, total, idx + 1);
        report.bytes_written += add_file(&mut zip, dest, file, &mut buffer, progress)?;
        report.files_added += 1;
        progress.on_entry_complete(name);
    }

    let output = zip.finish().map_err(|e| zip_error("finalize", dest, &e))?;
    report.bytes_compressed = output
        .metadata()
        .map_err(|e| io_error("stat", dest, &e))?
        .len();

    progress.on_complete();
    Ok(report)
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    dest: &Path,
    file: &WalkedFile,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<u64> {
    let mut source = File::open(&file.path).map_err(|e| io_error("open", &file.path, &e))?;
    let options = entry_options(&source, file.size);

    tracing::debug!(entry = %file.archive_name, size = file.size, "adding entry");
    zip.start_file(file.archive_name.as_str(), options)
        .map_err(|e| zip_error("add entry to", dest, &e))?;

    copy_with_progress(&mut source, zip, buffer, progress)
        .map_err(|e| io_error("compress", &file.path, &e))
}

fn entry_options(source: &File, size: u64) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(size >= ZIP64_THRESHOLD);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = source.metadata() {
            return options.unix_permissions(metadata.permissions().mode() & 0o777);
        }
    }
    #[cfg(not(unix))]
    let _ = source;

    options
}
