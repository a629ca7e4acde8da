//! Notebook Command
//!
//! Start a research session folder with a pre-filled notebook.md.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::scaffold::NotebookInitializer;
use crate::types::Result;

pub fn run(config: &Config, session_name: &str, base_path: &Path) -> Result<PathBuf> {
    let folder = NotebookInitializer::new(config.notebook.prefix.as_str())
        .init(session_name, base_path)?;

    println!("Initialized research session at: {}", folder.display());

    Ok(folder)
}
