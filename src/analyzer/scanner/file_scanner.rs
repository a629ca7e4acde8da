use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::constants::analysis::DEFAULT_MAX_DEPTH;
use crate::types::{AgentKitError, Result, log_filter_error};

/// Depth-limited file walker.
///
/// Lists regular files only. A file is kept when its path relative to the
/// root has at most `max_depth` components, so with the default of 2 both
/// `README.md` and `src/lib.rs` are listed but `src/cli/mod.rs` is not.
pub struct FileScanner {
    root: PathBuf,
    max_depth: usize,
    exclude: Vec<glob::Pattern>,
    respect_gitignore: bool,
    sorted: bool,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: vec![],
            respect_gitignore: false,
            sorted: false,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Exclude glob patterns matched against the root-relative path.
    /// Invalid patterns are logged and skipped.
    pub fn with_exclude(mut self, patterns: &[String]) -> Self {
        self.exclude = patterns
            .iter()
            .filter_map(|p| log_filter_error(glob::Pattern::new(p), "compiling exclude pattern"))
            .collect();
        self
    }

    pub fn respect_gitignore(mut self, enabled: bool) -> Self {
        self.respect_gitignore = enabled;
        self
    }

    /// Sort results by relative path after the walk.
    ///
    /// Walk order is filesystem dependent; turn this on when output must be
    /// reproducible.
    pub fn sorted(mut self, enabled: bool) -> Self {
        self.sorted = enabled;
        self
    }

    /// Get relative paths as strings
    pub fn paths(&self) -> Result<Vec<String>> {
        let files = self.scan()?;
        Ok(files
            .into_iter()
            .map(|f| f.relative.to_string_lossy().to_string())
            .collect())
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        if !self.root.exists() {
            return Err(AgentKitError::PathNotFound(self.root.clone()));
        }

        let mut files = Vec::new();

        // Standard filters off: hidden and ignored files are listed like any other.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(self.respect_gitignore)
            .hidden(false)
            .require_git(false)
            .max_depth(Some(self.max_depth))
            .follow_links(false)
            .build();

        for entry in walker.filter_map(|e| log_filter_error(e, "walking directory")) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };

            let depth = relative.components().count();
            if depth == 0 || depth > self.max_depth {
                continue;
            }

            if self.should_exclude(relative) {
                continue;
            }

            files.push(ScannedFile {
                relative: relative.to_path_buf(),
                depth,
            });
        }

        if self.sorted {
            files.sort_by(|a, b| a.relative.cmp(&b.relative));
        }

        Ok(files)
    }

    fn should_exclude(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|p| p.matches_path(relative))
    }
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub relative: PathBuf,
    /// Number of components in `relative`
    pub depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    fn layered_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.txt");
        touch(dir.path(), "a/mid.txt");
        touch(dir.path(), "a/b/deep.txt");
        dir
    }

    #[test]
    fn test_depth_limit_excludes_deeper_files() {
        let dir = layered_tree();
        let paths = FileScanner::new(dir.path()).sorted(true).paths().unwrap();

        let expected = vec![
            Path::new("a").join("mid.txt").to_string_lossy().to_string(),
            "top.txt".to_string(),
        ];
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_larger_depth_includes_everything() {
        let dir = layered_tree();
        let files = FileScanner::new(dir.path()).with_max_depth(3).scan().unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|f| f.depth == 3));
    }

    #[test]
    fn test_directories_are_not_listed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();
        touch(dir.path(), "only.txt");

        let paths = FileScanner::new(dir.path()).paths().unwrap();
        assert_eq!(paths, vec!["only.txt".to_string()]);
    }

    #[test]
    fn test_hidden_and_ignored_files_listed_by_default() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".gitignore");
        fs::write(dir.path().join(".gitignore"), "ignored.txt\n").unwrap();
        touch(dir.path(), "ignored.txt");
        touch(dir.path(), ".hidden");

        let paths = FileScanner::new(dir.path()).paths().unwrap();
        assert!(paths.contains(&"ignored.txt".to_string()));
        assert!(paths.contains(&".hidden".to_string()));

        let filtered = FileScanner::new(dir.path())
            .respect_gitignore(true)
            .paths()
            .unwrap();
        assert!(!filtered.contains(&"ignored.txt".to_string()));
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = layered_tree();
        let paths = FileScanner::new(dir.path())
            .with_exclude(&["a/*".to_string()])
            .paths()
            .unwrap();
        assert_eq!(paths, vec!["top.txt".to_string()]);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = FileScanner::new(dir.path().join("gone")).scan().unwrap_err();
        assert!(matches!(err, AgentKitError::PathNotFound(_)));
    }
}
