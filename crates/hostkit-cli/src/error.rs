//! Error conversion utilities for CLI.
//!
//! Converts hostkit-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use hostkit_core::HostkitError;
use hostkit_core::SystemQuery;
use std::path::Path;

/// Converts an archive operation failure into a user-facing error.
pub fn convert_archive_error(err: HostkitError, archive: &Path) -> anyhow::Error {
    match err {
        HostkitError::PathTraversal { path } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        HostkitError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        other if other.is_host_query() => convert_host_error(other),
        other => anyhow::Error::from(other),
    }
}

/// Converts a host query failure into a user-facing error.
pub fn convert_host_error(err: HostkitError) -> anyhow::Error {
    match err {
        HostkitError::NoAddressesFound => {
            anyhow!(
                "No non-loopback IPv4 address is configured on this host\n\
                 HINT: Bring up a network interface with an IPv4 address, or check that \
                 the host is not IPv6-only."
            )
        }
        HostkitError::SystemQuery { query, reason } => {
            let hint = match query {
                SystemQuery::Hostname => "The hostname could not be read from the OS.",
                SystemQuery::Interfaces => {
                    "Interface enumeration failed; the process may lack permission to read \
                     network configuration."
                }
                SystemQuery::CpuCores => {
                    "The OS did not report CPU topology; this is common inside some \
                     containers and virtual machines."
                }
            };
            anyhow!("Failed to query {query}: {reason}\nHINT: {hint}")
        }
        other => anyhow::Error::from(other),
    }
}

/// Adds archive context to a library result.
pub fn add_archive_context<T>(
    result: Result<T, HostkitError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}

/// Adds host query context to a library result.
pub fn add_host_context<T>(result: Result<T, HostkitError>) -> anyhow::Result<T> {
    result.map_err(convert_host_error)
}
