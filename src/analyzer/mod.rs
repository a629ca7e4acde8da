//! Codebase Analyzer Module
//!
//! Provides the context-gathering half of AGENTS.md authoring:
//! - Depth-limited file scanning
//! - Technology stack detection from marker files
//! - Existing documentation detection

pub mod scanner;
pub mod stack;
pub mod structure;

pub use stack::detect_tech_stack;
pub use structure::{RepositorySnapshot, StructureAnalyzer, detect_docs};
