//! Extraction reporting and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Report of a completed unzip operation.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of files written.
    pub files_extracted: usize,

    /// Number of explicit directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Callback trait for progress reporting during archive operations.
///
/// # Examples
///
/// ```
/// use hostkit_core::ProgressCallback;
/// use std::path::Path;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("Processing {}/{}: {}", current, total, path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("Completed: {}", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called when starting to process an entry.
    ///
    /// `current` is 1-indexed.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of entry content copied.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the whole operation succeeded.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
