//! Validate Command
//!
//! Checks an AGENTS.md for the required section labels.
//!
//! The outcome is printed and the exit status stays 0, unless `--strict` is
//! given, in which case a missing file or missing labels become an error.

use std::path::Path;

use crate::cli::ui::Output;
use crate::types::Result;
use crate::validator::{Reporter, SectionValidator};

pub struct ValidateOptions<'a> {
    pub file: &'a Path,
    pub strict: bool,
    pub report: Option<&'a Path>,
}

pub fn run(opts: ValidateOptions<'_>) -> Result<()> {
    let report = match SectionValidator::validate(opts.file) {
        Ok(report) => report,
        Err(e) if e.is_missing_input() && !opts.strict => {
            Output::new().failure(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    Reporter::print_summary(&report);

    if let Some(report_path) = opts.report {
        Reporter::generate_json(&report, report_path)?;
        println!("Report saved to: {}", report_path.display());
    }

    if opts.strict {
        report.into_result()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentKitError;
    use std::fs;
    use tempfile::TempDir;

    fn opts(file: &Path, strict: bool) -> ValidateOptions<'_> {
        ValidateOptions {
            file,
            strict,
            report: None,
        }
    }

    #[test]
    fn test_lenient_mode_never_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");

        assert!(run(opts(&path, false)).is_ok());

        fs::write(&path, "# Nothing useful").unwrap();
        assert!(run(opts(&path, false)).is_ok());
    }

    #[test]
    fn test_strict_mode_propagates_failures() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");

        let err = run(opts(&path, true)).unwrap_err();
        assert!(matches!(err, AgentKitError::FileNotFound(_)));

        fs::write(&path, "authority, operating mode, safety, persona, tech stack").unwrap();
        let err = run(opts(&path, true)).unwrap_err();
        match err {
            AgentKitError::ValidationFailed { missing } => assert_eq!(missing, vec!["Boundaries"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_report_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        let report = dir.path().join("report.json");
        fs::write(&path, "Authority Operating Mode Safety Persona Tech Stack Boundaries").unwrap();

        run(ValidateOptions {
            file: &path,
            strict: true,
            report: Some(&report),
        })
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(value["passed"], true);
    }
}
