//! Type-safe wrappers for archive extraction.
//!
//! These newtypes enforce path validation at the type level. Neither can be
//! built from a raw path without going through validation.

pub mod dest_dir;
pub mod safe_path;

pub use dest_dir::DestDir;
pub use safe_path::SafePath;
