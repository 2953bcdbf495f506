//! Hostname command implementation.

use crate::error::add_host_context;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let hostname = add_host_context(hostkit_core::host::hostname())?;
    formatter.format_hostname(&hostname)
}
