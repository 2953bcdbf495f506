//! Demo command implementation.
//!
//! Runs every library operation once: the three host queries, then zips a
//! generated file, unzips it, and zips a generated directory tree. All
//! artifacts live in a temporary directory removed when the command ends.

use crate::error::add_archive_context;
use crate::error::convert_host_error;
use crate::output::DemoSummary;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;
use hostkit_core::host;
use hostkit_core::unzip;
use hostkit_core::zip_directory;
use hostkit_core::zip_file;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FILE_NAME: &str = "file_to_zip.txt";
const FILE_ARCHIVE: &str = "archive.zip";
const FILE_CONTENT: &str = "Hello, this is the content of the file to be zipped.";
const UNZIP_DIR: &str = "unzipped_contents";
const DIR_NAME: &str = "dir_to_zip";
const DIR_ARCHIVE: &str = "dir_archive.zip";

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let hostname = host::hostname()
        .map_err(|e| warn_host(formatter, "hostname", e))
        .ok();
    let ipv4_addresses = host::ipv4_addresses()
        .map_err(|e| warn_host(formatter, "IPv4 addresses", e))
        .unwrap_or_default();
    let physical_cores = host::physical_core_count()
        .map_err(|e| warn_host(formatter, "CPU cores", e))
        .ok();

    let scratch = TempDir::new().context("failed to create scratch directory")?;
    let root = scratch.path();
    tracing::debug!(path = %root.display(), "demo scratch directory");

    let file_source = root.join(FILE_NAME);
    let file_archive = root.join(FILE_ARCHIVE);
    fs::write(&file_source, FILE_CONTENT)
        .with_context(|| format!("failed to create {}", file_source.display()))?;
    let file_report = add_archive_context(zip_file(&file_source, &file_archive), &file_archive)?;

    let unzip_dir = root.join(UNZIP_DIR);
    let unzip_report = add_archive_context(unzip(&file_archive, &unzip_dir), &file_archive)?;
    let restored = fs::read_to_string(unzip_dir.join(FILE_NAME))
        .context("unzipped file is missing")?;
    ensure!(
        restored == FILE_CONTENT,
        "unzipped content does not match the original"
    );

    let dir_source = root.join(DIR_NAME);
    let dir_archive = root.join(DIR_ARCHIVE);
    create_sample_tree(&dir_source)?;
    let dir_report = add_archive_context(zip_directory(&dir_source, &dir_archive), &dir_archive)?;

    formatter.format_demo_result(&DemoSummary {
        hostname,
        ipv4_addresses,
        physical_cores,
        file_source: FILE_NAME.into(),
        file_archive: FILE_ARCHIVE.into(),
        file_report,
        unzip_dir: UNZIP_DIR.into(),
        unzip_report,
        dir_source: DIR_NAME.into(),
        dir_archive: DIR_ARCHIVE.into(),
        dir_report,
    })
}

fn warn_host(formatter: &dyn OutputFormatter, what: &str, err: hostkit_core::HostkitError) {
    let err = convert_host_error(err);
    formatter.format_warning(&format!("skipping {what}: {err}"));
}

fn create_sample_tree(dir: &Path) -> Result<()> {
    let sub = dir.join("subdir");
    fs::create_dir_all(&sub).with_context(|| format!("failed to create {}", sub.display()))?;
    fs::write(dir.join("file1.txt"), "This is file one.").context("failed to create file1.txt")?;
    fs::write(sub.join("file2.txt"), "This is file two, in a subdirectory.")
        .context("failed to create file2.txt")?;
    Ok(())
}
