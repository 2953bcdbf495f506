//! Error types for host queries and archive operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `HostkitError`.
pub type Result<T> = std::result::Result<T, HostkitError>;

/// The host facility a failed [`HostkitError::SystemQuery`] was reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemQuery {
    /// The configured hostname.
    Hostname,
    /// The network interface address list.
    Interfaces,
    /// The physical CPU core count.
    CpuCores,
}

impl std::fmt::Display for SystemQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hostname => write!(f, "hostname"),
            Self::Interfaces => write!(f, "network interfaces"),
            Self::CpuCores => write!(f, "physical CPU core count"),
        }
    }
}

/// Errors that can occur during host queries and archive operations.
#[derive(Error, Debug)]
pub enum HostkitError {
    /// The operating system could not answer a host query.
    #[error("failed to query {query}: {reason}")]
    SystemQuery {
        /// What was being queried.
        query: SystemQuery,
        /// Underlying failure reported by the OS layer.
        reason: String,
    },

    /// Interface enumeration succeeded but no non-loopback IPv4 address is
    /// configured.
    #[error("no non-loopback IPv4 addresses found")]
    NoAddressesFound,

    /// Filesystem or archive I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An archive entry would resolve outside the extraction directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry name as stored in the archive.
        path: PathBuf,
    },
}

impl HostkitError {
    /// Builds a `SystemQuery` error from any displayable OS failure.
    pub(crate) fn system_query(query: SystemQuery, reason: impl std::fmt::Display) -> Self {
        Self::SystemQuery {
            query,
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if this error represents a security violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostkit_core::HostkitError;
    /// use std::path::PathBuf;
    ///
    /// let err = HostkitError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// assert!(!HostkitError::NoAddressesFound.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns `true` if the error came from a host query rather than from
    /// the filesystem.
    #[must_use]
    pub const fn is_host_query(&self) -> bool {
        matches!(self, Self::SystemQuery { .. } | Self::NoAddressesFound)
    }
}

/// Wraps an I/O error with the action and path that produced it.
///
/// The original error kind is preserved so callers can still match on
/// `ErrorKind::NotFound` and friends.
pub(crate) fn io_error(action: &str, path: &Path, err: &std::io::Error) -> HostkitError {
    HostkitError::Io(std::io::Error::new(
        err.kind(),
        format!("failed to {action} {}: {err}", path.display()),
    ))
}

/// Converts a zip crate failure into an I/O error naming the archive.
pub(crate) fn zip_error(action: &str, path: &Path, err: &zip::result::ZipError) -> HostkitError {
    let kind = match err {
        zip::result::ZipError::Io(inner) => inner.kind(),
        _ => std::io::ErrorKind::InvalidData,
    };
    HostkitError::Io(std::io::Error::new(
        kind,
        format!("failed to {action} {}: {err}", path.display()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HostkitError::NoAddressesFound;
        assert_eq!(err.to_string(), "no non-loopback IPv4 addresses found");
    }

    #[test]
    fn test_path_traversal_error() {
        let err = HostkitError::PathTraversal {
            path: PathBuf::from("../etc/passwd"),
        };
        assert!(err.to_string().contains("path traversal"));
        assert!(err.to_string().contains("../etc/passwd"));
    }

    #[test]
    fn test_system_query_error() {
        let err = HostkitError::system_query(SystemQuery::Hostname, "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to query hostname: permission denied"
        );
        assert!(err.is_host_query());
        assert!(!err.is_security_violation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HostkitError = io_err.into();
        assert!(matches!(err, HostkitError::Io(_)));
        assert!(!err.is_host_query());
    }

    #[test]
    fn test_io_error_keeps_kind_and_path() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = io_error("open source file", Path::new("/tmp/missing.txt"), &inner);

        match err {
            HostkitError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("open source file"));
                assert!(e.to_string().contains("/tmp/missing.txt"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_zip_error_is_invalid_data() {
        let err = zip_error(
            "open archive",
            Path::new("bad.zip"),
            &zip::result::ZipError::InvalidArchive("no central directory".into()),
        );
        match err {
            HostkitError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::InvalidData);
                assert!(e.to_string().contains("bad.zip"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_system_query_display() {
        assert_eq!(SystemQuery::Interfaces.to_string(), "network interfaces");
        assert_eq!(SystemQuery::CpuCores.to_string(), "physical CPU core count");
    }
}
