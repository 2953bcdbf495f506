//! Diagnostic logging setup.
//!
//! Library events go to stderr so stdout stays clean for command output and
//! JSON. `RUST_LOG` overrides the level picked from the CLI flags.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}
