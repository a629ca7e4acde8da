//! Analyze Command
//!
//! Snapshots a repository for AGENTS.md authoring and saves it as JSON.

use std::path::Path;

use crate::analyzer::StructureAnalyzer;
use crate::cli::ui::Output;
use crate::config::Config;
use crate::types::{AgentKitError, Result};

pub struct AnalyzeOptions<'a> {
    pub path: &'a Path,
    pub output: &'a Path,
    pub max_depth: Option<usize>,
    pub sort: bool,
}

pub fn run(config: &Config, opts: AnalyzeOptions<'_>) -> Result<()> {
    let mut analyzer = StructureAnalyzer::new(config.analysis.clone())
        .with_sorted_preview(opts.sort || config.analysis.sort_preview);
    if let Some(depth) = opts.max_depth {
        analyzer = analyzer.with_max_depth(depth);
    }

    // A missing root is reported, not failed: nothing is written and the exit status stays 0.
    let snapshot = match analyzer.analyze(opts.path) {
        Ok(snapshot) => snapshot,
        Err(e @ AgentKitError::PathNotFound(_)) => {
            println!("Error: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    snapshot.write_json(opts.output)?;

    Output::new().success(&format!(
        "Analysis complete. Context saved to {}",
        opts.output.display()
    ));

    Ok(())
}
