use std::fs;
use std::path::Path;

use super::ValidationReport;
use crate::cli::ui::Output;
use crate::types::Result;

pub struct Reporter;

impl Reporter {
    pub fn generate_json<P: AsRef<Path>>(report: &ValidationReport, output_path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;

        if let Some(parent) = output_path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, json)?;

        Ok(())
    }

    pub fn print_summary(report: &ValidationReport) {
        let out = Output::new();

        if report.passed {
            out.success("Validation Passed! Structure looks good.");
            return;
        }

        out.failure("Validation Failed. Missing required sections:");
        for section in &report.missing {
            println!("  - {}", section);
        }
    }
}
