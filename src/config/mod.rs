//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/agentkit/config.toml)
//! 3. Project config (.agentkit/config.toml)
//! 4. `--config <file>` passed on the command line
//! 5. Environment variables (AGENTKIT_*)
//! 6. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
