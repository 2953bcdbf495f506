//! IPv4 address listing command implementation.

use crate::cli::IpsArgs;
use crate::error::add_host_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use hostkit_core::host;

pub fn execute(args: &IpsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let addresses = if args.first {
        vec![add_host_context(host::first_ipv4())?]
    } else {
        add_host_context(host::ipv4_addresses())?
    };

    formatter.format_addresses(&addresses)
}
