//! Hostkit CLI - host introspection and traversal-safe zip archiving.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let show_progress = !cli.quiet && !cli.json && progress::CliProgress::should_show();

    match &cli.command {
        cli::Commands::Hostname => commands::hostname::execute(&*formatter),
        cli::Commands::Ips(args) => commands::ips::execute(args, &*formatter),
        cli::Commands::Cpu => commands::cpu::execute(&*formatter),
        cli::Commands::Zip(args) => commands::zip::execute(args, &*formatter, show_progress),
        cli::Commands::Unzip(args) => commands::unzip::execute(args, &*formatter, show_progress),
        cli::Commands::Demo => commands::demo::execute(&*formatter),
    }
}
