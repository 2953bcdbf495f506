//! CPU topology queries.

use crate::HostkitError;
use crate::Result;
use crate::error::SystemQuery;

/// Returns the number of physical CPU cores.
///
/// Hyper-threads are not counted.
///
/// # Errors
///
/// Returns `HostkitError::SystemQuery` when the platform cannot report a
/// physical core count.
pub fn physical_core_count() -> Result<usize> {
    let count = sysinfo::System::physical_core_count()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            HostkitError::system_query(SystemQuery::CpuCores, "core count not reported by the OS")
        })?;

    tracing::debug!(cores = count, "resolved physical core count");
    Ok(count)
}
