//! Technology Stack Detection
//!
//! Marker-file detection at the repository root. Labels are appended in a
//! fixed order: Node.js (plus frameworks from package.json), Python, Rust, Go.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::constants::analysis::{
    GO_MODULE, NODE_FRAMEWORKS, NODE_MANIFEST, PYTHON_MARKERS, RUST_MANIFEST, TS_CONFIG,
};
use crate::types::Result;

/// Detect technology labels from marker files directly under `root`.
pub fn detect_tech_stack(root: &Path) -> Vec<String> {
    let mut stack = Vec::new();

    if root.join(NODE_MANIFEST).exists() {
        stack.push("Node.js".to_string());
        detect_node_frameworks(root, &mut stack);
    }

    if PYTHON_MARKERS.iter().any(|m| root.join(m).exists()) {
        stack.push("Python".to_string());
    }

    if root.join(RUST_MANIFEST).exists() {
        stack.push("Rust".to_string());
    }

    if root.join(GO_MODULE).exists() {
        stack.push("Go".to_string());
    }

    stack
}

/// Append framework labels derived from package.json.
///
/// A manifest that cannot be read or parsed adds nothing; the run continues
/// with the labels found so far.
fn detect_node_frameworks(root: &Path, stack: &mut Vec<String>) {
    let manifest = root.join(NODE_MANIFEST);

    let parsed = (|| -> Result<Value> {
        let content = fs::read_to_string(&manifest)?;
        Ok(serde_json::from_str(&content)?)
    })();

    let data = match parsed {
        Ok(data) => data,
        Err(e) => {
            debug!("Ignoring unreadable {}: {}", manifest.display(), e);
            return;
        }
    };

    let has_dep = |name: &str| {
        data.get("dependencies")
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(name))
    };

    for (package, label) in NODE_FRAMEWORKS {
        if has_dep(*package) {
            stack.push((*label).to_string());
        }
    }

    if has_dep("typescript") || root.join(TS_CONFIG).exists() {
        stack.push("TypeScript".to_string());
    }
}
