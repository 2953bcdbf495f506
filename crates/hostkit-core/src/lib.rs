//! Host introspection and traversal-safe ZIP archiving.
//!
//! `hostkit-core` answers three questions about the machine it runs on
//! (hostname, non-loopback IPv4 addresses, physical CPU cores) and moves
//! files in and out of deflate-compressed ZIP archives. Extraction refuses
//! any entry whose name would resolve outside the destination directory.
//!
//! # Examples
//!
//! ```no_run
//! use hostkit_core::host;
//! use hostkit_core::unzip;
//! use hostkit_core::zip_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! println!("running on {}", host::hostname()?);
//!
//! zip_directory("project", "project.zip")?;
//! let report = unzip("project.zip", "/tmp/project")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod copy;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod host;
pub mod report;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

pub use api::zip_path;
pub use api::zip_path_with_progress;
pub use creation::CreationReport;
pub use creation::zip_directory;
pub use creation::zip_directory_with_progress;
pub use creation::zip_file;
pub use creation::zip_file_with_progress;
pub use error::HostkitError;
pub use error::Result;
pub use error::SystemQuery;
pub use extraction::unzip;
pub use extraction::unzip_with_progress;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;

pub use types::DestDir;
pub use types::SafePath;
