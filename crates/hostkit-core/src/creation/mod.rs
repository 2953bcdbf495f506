//! Archive creation.
//!
//! Builds deflate-compressed ZIP archives from a single file or from a
//! directory tree.

pub mod report;
pub mod walker;
pub mod zip;

pub use report::CreationReport;
pub use walker::FileWalker;
pub use walker::WalkedFile;
pub use zip::zip_directory;
pub use zip::zip_directory_with_progress;
pub use zip::zip_file;
pub use zip::zip_file_with_progress;
