//! File Scaffolding
//!
//! - AGENTS.md template copying
//! - Research notebook session folders

pub mod notebook;
pub mod template;

pub use notebook::{NotebookInitializer, render_notebook};
pub use template::{TemplateInitializer, TemplateKind, TemplateSource, resolve_template_source};
