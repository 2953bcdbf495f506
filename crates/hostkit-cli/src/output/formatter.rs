//! Output formatter trait for CLI results.

use anyhow::Result;
use hostkit_core::CreationReport;
use hostkit_core::ExtractionReport;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::path::Path;
use std::path::PathBuf;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the system hostname
    fn format_hostname(&self, hostname: &str) -> Result<()>;

    /// Format a list of IPv4 addresses
    fn format_addresses(&self, addresses: &[Ipv4Addr]) -> Result<()>;

    /// Format the physical CPU core count
    fn format_cpu_cores(&self, cores: usize) -> Result<()>;

    /// Format archive creation result
    fn format_creation_result(&self, output_path: &Path, report: &CreationReport) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(&self, output_dir: &Path, report: &ExtractionReport)
    -> Result<()>;

    /// Format the outcome of the demo run
    fn format_demo_result(&self, summary: &DemoSummary) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Everything the demo command did, in order.
///
/// Host fields are `None`/empty when the query failed; the demo reports that
/// as a warning and carries on with the archive steps.
#[derive(Debug)]
pub struct DemoSummary {
    pub hostname: Option<String>,
    pub ipv4_addresses: Vec<Ipv4Addr>,
    pub physical_cores: Option<usize>,
    pub file_source: PathBuf,
    pub file_archive: PathBuf,
    pub file_report: CreationReport,
    pub unzip_dir: PathBuf,
    pub unzip_report: ExtractionReport,
    pub dir_source: PathBuf,
    pub dir_archive: PathBuf,
    pub dir_report: CreationReport,
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }

    pub fn warning(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Warning,
            data: Some(data),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_envelope_shape() {
        #[derive(Serialize)]
        struct Data {
            hostname: String,
        }

        let output = JsonOutput::success(
            "hostname",
            Data {
                hostname: "box".to_string(),
            },
        );
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["operation"], "hostname");
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["hostname"], "box");
    }

    #[test]
    fn test_warning_status() {
        let output = JsonOutput::warning("demo", "skipped");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["status"], "warning");
    }
}
