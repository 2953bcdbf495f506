//! Hostname lookup.

use crate::HostkitError;
use crate::Result;
use crate::error::SystemQuery;

/// Returns the hostname configured on the current system.
///
/// # Errors
///
/// Returns `HostkitError::SystemQuery` if the OS call fails or the name is
/// not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let name = hostkit_core::host::hostname()?;
/// println!("Hostname: {name}");
/// # Ok(())
/// # }
/// ```
pub fn hostname() -> Result<String> {
    let raw = ::hostname::get().map_err(|e| HostkitError::system_query(SystemQuery::Hostname, e))?;

    let name = raw.into_string().map_err(|raw| {
        HostkitError::system_query(
            SystemQuery::Hostname,
            format!("hostname is not valid UTF-8: {}", raw.to_string_lossy()),
        )
    })?;

    tracing::debug!(hostname = %name, "resolved hostname");
    Ok(name)
}
