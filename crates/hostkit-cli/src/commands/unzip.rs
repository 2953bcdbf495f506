//! Unzip command implementation.

use crate::cli::UnzipArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use hostkit_core::NoopProgress;
use hostkit_core::unzip_with_progress;
use std::env;

pub fn execute(
    args: &UnzipArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let result = if show_progress {
        let mut progress = CliProgress::new("Unzipping");
        unzip_with_progress(&args.archive, &output_dir, &mut progress)
    } else {
        unzip_with_progress(&args.archive, &output_dir, &mut NoopProgress)
    };

    let report = add_archive_context(result, &args.archive)?;
    formatter.format_extraction_result(&output_dir, &report)
}
