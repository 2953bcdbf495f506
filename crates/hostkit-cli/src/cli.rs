//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the system hostname
    Hostname,
    /// List non-loopback IPv4 addresses
    Ips(IpsArgs),
    /// Print the number of physical CPU cores
    Cpu,
    /// Compress a file or directory into a zip archive
    Zip(ZipArgs),
    /// Extract a zip archive, rejecting entries that escape the target
    Unzip(UnzipArgs),
    /// Run every operation once inside a scratch directory
    Demo,
}

#[derive(clap::Args)]
pub struct IpsArgs {
    /// Print only the first address
    #[arg(long)]
    pub first: bool,
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// File or directory to compress
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Archive to create (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(clap::Args)]
pub struct UnzipArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
