//! Unified Error Type System
//!
//! Centralized error type for every agentkit operation.
//!
//! ## Error Taxonomy
//!
//! - **Missing input**: source root or document does not exist
//! - **Missing asset**: template file absent from the assets directory
//! - **Copy/write**: destination not writable, parent missing, etc.
//! - **Config**: invalid or unreadable configuration
//!
//! Manifest parse failures never reach this type: the analyzer swallows them
//! and degrades to partial detection.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentKitError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Path {} does not exist.", .0.display())]
    PathNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Scaffolding Errors
    // -------------------------------------------------------------------------
    #[error("Template file not found at {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("could not create {}: {source}", to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    /// Raised only by `validate --strict`
    #[error("Validation failed: missing {}", missing.join(", "))]
    ValidationFailed { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, AgentKitError>;

impl AgentKitError {
    /// Whether this error means an input path was absent rather than unusable
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::FileNotFound(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display() {
        let err = AgentKitError::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "Path /nope does not exist.");
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_copy_error_shows_cause() {
        let err = AgentKitError::Copy {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "could not create b: denied");
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_validation_failed_lists_labels() {
        let err = AgentKitError::ValidationFailed {
            missing: vec!["Safety".to_string(), "Persona".to_string()],
        };
        assert_eq!(err.to_string(), "Validation failed: missing Safety, Persona");
    }
}
