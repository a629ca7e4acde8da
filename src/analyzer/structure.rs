//! Repository Structure Analyzer
//!
//! Builds a [`RepositorySnapshot`] for AGENTS.md authoring: a shallow file
//! preview, the detected technology stack and the documentation that already
//! exists. The snapshot is serialized to JSON and then discarded.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tracing::debug;

use super::scanner::FileScanner;
use super::stack::detect_tech_stack;
use crate::config::AnalysisConfig;
use crate::constants::analysis::DOC_CANDIDATES;
use crate::types::{AgentKitError, Result, display_name};

/// Codebase context handed to whoever writes the AGENTS.md
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Root-relative file paths no deeper than the configured depth
    pub structure_preview: Vec<String>,
    /// Technology labels in detection order
    pub tech_stack: Vec<String>,
    /// Documentation candidates present at the root, in candidate order
    pub existing_docs: Vec<String>,
    /// Final component of the analyzed root
    pub repo_name: String,
}

impl RepositorySnapshot {
    /// Write the snapshot as pretty-printed JSON, replacing any existing file
    pub fn write_json<P: AsRef<Path>>(&self, output: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(output.as_ref(), json)?;
        debug!("Wrote snapshot to {}", output.as_ref().display());
        Ok(())
    }
}

/// Analyzes a repository root into a [`RepositorySnapshot`]
#[derive(Debug, Clone, Default)]
pub struct StructureAnalyzer {
    config: AnalysisConfig,
}

impl StructureAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Override the preview depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Sort the preview before it is returned
    pub fn with_sorted_preview(mut self, sorted: bool) -> Self {
        self.config.sort_preview = sorted;
        self
    }

    /// Perform the complete analysis
    pub fn analyze<P: AsRef<Path>>(&self, root: P) -> Result<RepositorySnapshot> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(AgentKitError::PathNotFound(root.to_path_buf()));
        }

        let structure_preview = FileScanner::new(root)
            .with_max_depth(self.config.max_depth)
            .with_exclude(&self.config.exclude)
            .respect_gitignore(self.config.respect_gitignore)
            .sorted(self.config.sort_preview)
            .paths()?;

        let tech_stack = detect_tech_stack(root);
        let existing_docs = detect_docs(root);

        debug!(
            files = structure_preview.len(),
            stack = ?tech_stack,
            docs = ?existing_docs,
            "Analyzed {}",
            root.display()
        );

        Ok(RepositorySnapshot {
            structure_preview,
            tech_stack,
            existing_docs,
            repo_name: display_name(root),
        })
    }
}

/// Which documentation candidates exist under `root`, in candidate order.
/// A trailing `/` is dropped for the lookup, so `docs/` matches a file too.
pub fn detect_docs(root: &Path) -> Vec<String> {
    DOC_CANDIDATES
        .iter()
        .filter(|candidate| root.join(candidate.trim_end_matches('/')).exists())
        .map(|candidate| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_detect_docs_preserves_candidate_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "docs/index.md");
        touch(dir.path(), "README.md");

        assert_eq!(detect_docs(dir.path()), vec!["README.md", "docs/"]);
    }

    #[test]
    fn test_detect_docs_plain_docs_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "docs");

        assert_eq!(detect_docs(dir.path()), vec!["docs/"]);
    }

    #[test]
    fn test_detect_docs_none() {
        let dir = TempDir::new().unwrap();
        assert!(detect_docs(dir.path()).is_empty());
    }

    #[test]
    fn test_analyze_go_repo() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("service");
        touch(&root, "go.mod");

        let snapshot = StructureAnalyzer::default().analyze(&root).unwrap();
        assert_eq!(snapshot.tech_stack, vec!["Go"]);
        assert_eq!(snapshot.structure_preview, vec!["go.mod"]);
        assert!(snapshot.existing_docs.is_empty());
        assert_eq!(snapshot.repo_name, "service");
    }

    #[test]
    fn test_analyze_depth_limit() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "one.txt");
        touch(dir.path(), "a/two.txt");
        touch(dir.path(), "a/b/three.txt");

        let snapshot = StructureAnalyzer::default()
            .with_sorted_preview(true)
            .analyze(dir.path())
            .unwrap();
        assert_eq!(snapshot.structure_preview.len(), 2);
        assert!(snapshot.structure_preview.iter().all(|p| !p.contains("three")));
    }

    #[test]
    fn test_analyze_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = StructureAnalyzer::default()
            .analyze(dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, AgentKitError::PathNotFound(_)));
    }

    #[test]
    fn test_write_json_field_names() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("ctx.json");
        fs::write(&output, "stale").unwrap();

        let snapshot = RepositorySnapshot {
            structure_preview: vec!["go.mod".to_string()],
            tech_stack: vec!["Go".to_string()],
            existing_docs: vec![],
            repo_name: "repo".to_string(),
        };
        snapshot.write_json(&output).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["tech_stack"], serde_json::json!(["Go"]));
        assert_eq!(value["repo_name"], "repo");
        assert_eq!(value["existing_docs"], serde_json::json!([]));
        assert_eq!(value["structure_preview"], serde_json::json!(["go.mod"]));
    }
}
