//! Research Notebook Initializer
//!
//! Creates `<prefix>_<session>_<YYYYmmdd_HHMMSS>/notebook.md` under a base
//! directory. The notebook is a fixed skeleton; only the session name and the
//! date are filled in, everything else is placeholder prose for manual editing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::constants::notebook::{
    DATE_FORMAT, DEFAULT_PREFIX, FILE_NAME, OBJECTIVE_PLACEHOLDER, TIMESTAMP_FORMAT,
};
use crate::types::Result;

#[derive(Debug, Clone)]
pub struct NotebookInitializer {
    prefix: String,
}

impl Default for NotebookInitializer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl NotebookInitializer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a session folder stamped with the current local time
    pub fn init<P: AsRef<Path>>(&self, session_name: &str, base: P) -> Result<PathBuf> {
        self.init_at(session_name, base, Local::now())
    }

    /// Create a session folder stamped with `now`.
    ///
    /// Intermediate directories are created as needed and an existing folder
    /// is reused; its `notebook.md` is overwritten. The session name is not
    /// sanitized.
    pub fn init_at<P: AsRef<Path>>(
        &self,
        session_name: &str,
        base: P,
        now: DateTime<Local>,
    ) -> Result<PathBuf> {
        let folder = base.as_ref().join(self.folder_name(session_name, now));
        fs::create_dir_all(&folder)?;

        let notebook_path = folder.join(FILE_NAME);
        fs::write(&notebook_path, render_notebook(session_name, now))?;
        debug!("Wrote {}", notebook_path.display());

        Ok(folder)
    }

    pub fn folder_name(&self, session_name: &str, now: DateTime<Local>) -> String {
        format!(
            "{}_{}_{}",
            self.prefix,
            session_name,
            now.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Notebook skeleton with the session name and date filled in
pub fn render_notebook(session_name: &str, now: DateTime<Local>) -> String {
    format!(
        "# Research Notebook: {name}\n\
         Date: {date}\n\
         \n\
         ## Objective\n\
         {objective}\n\
         \n\
         ## Layers & Iterations\n\
         ### Layer 1\n\
         **Questions:**\n\
         - \n\
         **Findings:**\n\
         - \n\
         \n\
         ## Conflicting Data & Gaps\n\
         - \n\
         \n\
         ## Sources\n\
         - \n",
        name = session_name,
        date = now.format(DATE_FORMAT),
        objective = OBJECTIVE_PLACEHOLDER,
    )
}
