//! agentkit - AGENTS.md and Research Notebook Toolkit
//!
//! Small, independent file-scaffolding and validation operations used when
//! writing an `AGENTS.md` for a codebase or starting a research session.
//!
//! ## Operations
//!
//! - **Analyze**: depth-limited file preview, tech stack and existing docs as JSON
//! - **Init**: copy a shipped AGENTS.md template (base, strict, flexible)
//! - **Validate**: check that every required section label is present
//! - **Notebook**: create a timestamped research folder with a notebook skeleton
//!
//! ## Quick Start
//!
//! ```ignore
//! use agentkit::{StructureAnalyzer, SectionValidator};
//!
//! let snapshot = StructureAnalyzer::default().analyze("path/to/repo")?;
//! snapshot.write_json("context.json")?;
//!
//! let report = SectionValidator::validate("AGENTS.md")?;
//! assert!(report.passed, "missing: {:?}", report.missing);
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: file scanning, stack and documentation detection
//! - [`scaffold`]: template copying and notebook creation
//! - [`validator`]: required-section checks and reports
//! - [`config`]: layered configuration

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod scaffold;
pub mod types;
pub mod validator;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{AgentKitError, Result};

// =============================================================================
// Operation Re-exports
// =============================================================================

pub use analyzer::{RepositorySnapshot, StructureAnalyzer, scanner::FileScanner};
pub use scaffold::{NotebookInitializer, TemplateInitializer, TemplateKind};
pub use validator::{SectionValidator, ValidationReport};
