//! Human-readable output formatter with colors and styling.

use super::format_size;
use super::formatter::DemoSummary;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use hostkit_core::CreationReport;
use hostkit_core::ExtractionReport;
use std::net::Ipv4Addr;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn check(&self, message: &str) {
        if self.use_colors {
            self.line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.line(message);
        }
    }

    fn heading(&self, title: &str) {
        if self.use_colors {
            self.line(&format!("{}", style(format!("--- {title} ---")).bold()));
        } else {
            self.line(&format!("--- {title} ---"));
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn creation_details(&self, report: &CreationReport) {
        self.line(&format!(
            "  Files added:      {}",
            Self::format_number(report.files_added)
        ));
        self.line(&format!(
            "  Total size:       {}",
            format_size(report.bytes_written)
        ));
        if report.bytes_compressed > 0 {
            self.line(&format!(
                "  Archive size:     {}",
                format_size(report.bytes_compressed)
            ));
        }
        if self.verbose {
            self.line(&format!(
                "  Compression:      {:.1}%",
                report.compression_percentage()
            ));
            self.line(&format!("  Duration:         {:?}", report.duration));
        }
    }

    fn extraction_details(&self, report: &ExtractionReport) {
        self.line(&format!(
            "  Files extracted: {}",
            Self::format_number(report.files_extracted)
        ));
        self.line(&format!(
            "  Directories: {}",
            Self::format_number(report.directories_created)
        ));
        self.line(&format!(
            "  Total size: {}",
            format_size(report.bytes_written)
        ));
        if self.verbose {
            self.line(&format!("  Duration: {:?}", report.duration));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_hostname(&self, hostname: &str) -> Result<()> {
        if !self.quiet {
            self.line(&format!("Hostname: {hostname}"));
        }
        Ok(())
    }

    fn format_addresses(&self, addresses: &[Ipv4Addr]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line("Active IPv4 Addresses:");
        for address in addresses {
            self.line(&format!("- {address}"));
        }
        Ok(())
    }

    fn format_cpu_cores(&self, cores: usize) -> Result<()> {
        if !self.quiet {
            self.line(&format!("Physical CPU Cores: {cores}"));
        }
        Ok(())
    }

    fn format_creation_result(&self, output_path: &Path, report: &CreationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.check(&format!("Archive created: {}", output_path.display()));
        self.line("");
        self.creation_details(report);
        Ok(())
    }

    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.check(&format!("Extraction complete: {}", output_dir.display()));
        self.extraction_details(report);
        Ok(())
    }

    fn format_demo_result(&self, summary: &DemoSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.heading("1. Get Hostname");
        if let Some(hostname) = &summary.hostname {
            self.line(&format!("Hostname: {hostname}"));
        }
        self.line("");

        self.heading("2. Get all active IP Addresses");
        self.format_addresses(&summary.ipv4_addresses)?;
        self.line("");

        self.heading("3. Get CPU Info");
        if let Some(cores) = summary.physical_cores {
            self.line(&format!("Physical CPU Cores: {cores}"));
        }
        self.line("");

        self.heading("4. Zip a file");
        self.line(&format!(
            "Zipping '{}' into '{}'...",
            summary.file_source.display(),
            summary.file_archive.display()
        ));
        self.check("File zipped successfully!");
        if self.verbose {
            self.creation_details(&summary.file_report);
        }
        self.line("");

        self.heading("5. Unzip a file");
        self.line(&format!(
            "Unzipping '{}' into directory '{}'...",
            summary.file_archive.display(),
            summary.unzip_dir.display()
        ));
        self.check("File unzipped successfully!");
        if self.verbose {
            self.extraction_details(&summary.unzip_report);
        }
        self.line("");

        self.heading("6. Zip a directory");
        self.line(&format!(
            "Zipping directory '{}' into '{}'...",
            summary.dir_source.display(),
            summary.dir_archive.display()
        ));
        self.check("Directory zipped successfully!");
        if self.verbose {
            self.creation_details(&summary.dir_report);
        }
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            self.line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(42), "42");
        assert_eq!(HumanFormatter::format_number(999), "999");
    }

    #[test]
    fn test_format_number_thousands() {
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1234), "1,234");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }
}
