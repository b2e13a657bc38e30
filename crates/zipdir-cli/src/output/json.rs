//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use zipdir_core::PackReport;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PackOutput {
    output_path: String,
    files_added: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    compression_percentage: f64,
    duration_ms: u128,
}

impl PackOutput {
    fn new(output_path: &Path, report: &PackReport) -> Self {
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

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        let output = JsonOutput::success("create", PackOutput::new(output_path, report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("create", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pack_output_fields() {
        let mut report = PackReport::new();
        report.files_added = 3;
        report.bytes_written = 1000;
        report.bytes_compressed = 250;
        report.duration = Duration::from_millis(12);

        let data = PackOutput::new(Path::new("out.zip"), &report);
        let json = serde_json::to_string(&JsonOutput::success("create", data)).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"output_path\":\"out.zip\""));
        assert!(json.contains("\"files_added\":3"));
        assert!(json.contains("\"compression_ratio\":4.0"));
        assert!(json.contains("\"duration_ms\":12"));
    }
}
