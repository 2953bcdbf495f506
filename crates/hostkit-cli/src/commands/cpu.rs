//! CPU command implementation.

use crate::error::add_host_context;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let cores = add_host_context(hostkit_core::host::physical_core_count())?;
    formatter.format_cpu_cores(cores)
}
