//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/agentkit/) and project (.agentkit/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Structure analyzer settings
    pub analysis: AnalysisConfig,

    /// Template initializer settings
    pub templates: TemplatesConfig,

    /// Notebook initializer settings
    pub notebook: NotebookConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            templates: TemplatesConfig::default(),
            notebook: NotebookConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `AgentKitError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.analysis.max_depth == 0 {
            return Err(crate::types::AgentKitError::Config(
                "analysis.max_depth must be greater than 0".to_string(),
            ));
        }

        for pattern in &self.analysis.exclude {
            glob::Pattern::new(pattern).map_err(|e| {
                crate::types::AgentKitError::Config(format!(
                    "Invalid exclude pattern '{}': {}",
                    pattern, e
                ))
            })?;
        }

        if self.notebook.prefix.trim().is_empty() {
            return Err(crate::types::AgentKitError::Config(
                "notebook.prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum path component count listed in `structure_preview`
    pub max_depth: usize,

    /// Sort `structure_preview` before writing (walk order otherwise)
    pub sort_preview: bool,

    /// Honour .gitignore and friends while walking
    pub respect_gitignore: bool,

    /// Glob patterns (relative to the root) to leave out of the preview
    pub exclude: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_depth: constants::analysis::DEFAULT_MAX_DEPTH,
            sort_preview: false,
            respect_gitignore: false,
            exclude: Vec::new(),
        }
    }
}

// =============================================================================
// Templates Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Explicit template directory; resolved next to the executable when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// =============================================================================
// Notebook Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookConfig {
    /// Folder name prefix: `<prefix>_<session>_<timestamp>`
    pub prefix: String,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            prefix: constants::notebook::DEFAULT_PREFIX.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
