//! AGENTS.md Section Validator
//!
//! Coarse completeness check: every required label must occur somewhere in
//! the document, compared case-insensitively. This is a substring test, not
//! a markdown parse, so a label mentioned in prose counts as present.

pub mod reporter;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::validation::REQUIRED_SECTIONS;
use crate::types::{AgentKitError, Result};

pub use reporter::Reporter;

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Validated document, when the check came from a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub passed: bool,
    /// Missing labels, in required-label order
    pub missing: Vec<String>,
}

impl ValidationReport {
    fn from_missing(missing: Vec<String>) -> Self {
        Self {
            file: None,
            passed: missing.is_empty(),
            missing,
        }
    }

    /// Convert a failed report into `AgentKitError::ValidationFailed`
    pub fn into_result(self) -> Result<Self> {
        if self.passed {
            Ok(self)
        } else {
            Err(AgentKitError::ValidationFailed {
                missing: self.missing,
            })
        }
    }
}

pub struct SectionValidator;

impl SectionValidator {
    /// Check in-memory content against the required labels
    pub fn check(content: &str) -> ValidationReport {
        let haystack = content.to_lowercase();
        let missing = REQUIRED_SECTIONS
            .iter()
            .filter(|section| !haystack.contains(&section.to_lowercase()))
            .map(|section| section.to_string())
            .collect();

        ValidationReport::from_missing(missing)
    }

    /// Read `path` and check it. A missing file is reported without reading.
    pub fn validate<P: AsRef<Path>>(path: P) -> Result<ValidationReport> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AgentKitError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut report = Self::check(&content);
        report.file = Some(path.to_path_buf());

        debug!(
            "Validated {}: {} of {} labels missing",
            path.display(),
            report.missing.len(),
            REQUIRED_SECTIONS.len()
        );

        Ok(report)
    }
}
