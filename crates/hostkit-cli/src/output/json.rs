//! JSON output formatter for machine-readable results.

use super::formatter::DemoSummary;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use hostkit_core::CreationReport;
use hostkit_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::net::Ipv4Addr;
use std::path::Path;

pub struct JsonFormatter;

#[derive(Serialize)]
struct CreationOutput {
    output_path: String,
    files_added: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    compression_percentage: f64,
    duration_ms: u128,
}

impl CreationOutput {
    fn new(output_path: &Path, report: &CreationReport) -> Self {
        Self {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

#[derive(Serialize)]
struct ExtractionOutput {
    output_dir: String,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl ExtractionOutput {
    fn new(output_dir: &Path, report: &ExtractionReport) -> Self {
        Self {
            output_dir: output_dir.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_hostname(&self, hostname: &str) -> Result<()> {
        #[derive(Serialize)]
        struct HostnameOutput<'a> {
            hostname: &'a str,
        }

        Self::output(&JsonOutput::success("hostname", HostnameOutput { hostname }))
    }

    fn format_addresses(&self, addresses: &[Ipv4Addr]) -> Result<()> {
        #[derive(Serialize)]
        struct AddressesOutput<'a> {
            addresses: &'a [Ipv4Addr],
        }

        Self::output(&JsonOutput::success("ips", AddressesOutput { addresses }))
    }

    fn format_cpu_cores(&self, cores: usize) -> Result<()> {
        #[derive(Serialize)]
        struct CpuOutput {
            physical_cores: usize,
        }

        Self::output(&JsonOutput::success(
            "cpu",
            CpuOutput {
                physical_cores: cores,
            },
        ))
    }

    fn format_creation_result(&self, output_path: &Path, report: &CreationReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            "zip",
            CreationOutput::new(output_path, report),
        ))
    }

    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        Self::output(&JsonOutput::success(
            "unzip",
            ExtractionOutput::new(output_dir, report),
        ))
    }

    fn format_demo_result(&self, summary: &DemoSummary) -> Result<()> {
        #[derive(Serialize)]
        struct DemoOutput<'a> {
            hostname: Option<&'a str>,
            ipv4_addresses: &'a [Ipv4Addr],
            physical_cores: Option<usize>,
            zip_file: CreationOutput,
            unzip: ExtractionOutput,
            zip_directory: CreationOutput,
        }

        let data = DemoOutput {
            hostname: summary.hostname.as_deref(),
            ipv4_addresses: &summary.ipv4_addresses,
            physical_cores: summary.physical_cores,
            zip_file: CreationOutput::new(&summary.file_archive, &summary.file_report),
            unzip: ExtractionOutput::new(&summary.unzip_dir, &summary.unzip_report),
            zip_directory: CreationOutput::new(&summary.dir_archive, &summary.dir_report),
        };

        Self::output(&JsonOutput::success("demo", data))
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData<'a> {
            message: &'a str,
        }

        // Warnings go to stderr so stdout stays a single JSON document.
        let output = JsonOutput::warning("warning", WarningData { message });
        if let Ok(json) = serde_json::to_string(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}
