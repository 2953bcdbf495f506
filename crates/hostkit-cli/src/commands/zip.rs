//! Zip command implementation.

use crate::cli::ZipArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use hostkit_core::NoopProgress;
use hostkit_core::zip_path_with_progress;

pub fn execute(args: &ZipArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let result = if show_progress {
        let mut progress = CliProgress::new("Zipping");
        zip_path_with_progress(&args.source, &args.output, &mut progress)
    } else {
        zip_path_with_progress(&args.source, &args.output, &mut NoopProgress)
    };

    let report = add_archive_context(result, &args.output)?;
    formatter.format_creation_result(&args.output, &report)
}
