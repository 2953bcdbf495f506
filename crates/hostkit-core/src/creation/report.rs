//! Archive creation reporting.

use std::time::Duration;

/// Report of a completed zip operation.
///
/// # Examples
///
/// ```
/// use hostkit_core::creation::CreationReport;
///
/// let mut report = CreationReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreationReport {
    /// Number of file entries written to the archive.
    pub files_added: usize,

    /// Total uncompressed bytes read from source files.
    pub bytes_written: u64,

    /// Size of the finished archive file in bytes.
    pub bytes_compressed: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl CreationReport {
    /// Creates a new empty creation report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the space saved as a percentage of the uncompressed size.
    ///
    /// Returns 0.0 if nothing was written. Archive overhead can make this
    /// negative for tiny or incompressible inputs.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        (1.0 - self.bytes_compressed as f64 / self.bytes_written as f64) * 100.0
    }
}
