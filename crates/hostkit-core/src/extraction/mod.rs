//! Archive extraction.
//!
//! Unpacks ZIP archives into a destination directory, refusing any entry
//! whose name would resolve outside of it.

pub mod common;
pub mod zip;

pub use zip::unzip;
pub use zip::unzip_with_progress;
