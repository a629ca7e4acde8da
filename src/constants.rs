//! Global Constants
//!
//! Centralized fixed tables and defaults.
//! Nothing here is mutated after definition.

/// Structure analyzer constants
pub mod analysis {
    /// Default maximum component count for previewed paths
    pub const DEFAULT_MAX_DEPTH: usize = 2;

    /// Documentation artifacts looked for at the repository root, in report order
    pub const DOC_CANDIDATES: &[&str] = &["README.md", "CONTRIBUTING.md", "docs/"];

    /// Node-style package manifest
    pub const NODE_MANIFEST: &str = "package.json";

    /// TypeScript compiler config
    pub const TS_CONFIG: &str = "tsconfig.json";

    /// Python markers (either one is enough)
    pub const PYTHON_MARKERS: &[&str] = &["requirements.txt", "pyproject.toml"];

    pub const RUST_MANIFEST: &str = "Cargo.toml";

    pub const GO_MODULE: &str = "go.mod";

    /// `dependencies` keys in the Node manifest and the label each one adds
    pub const NODE_FRAMEWORKS: &[(&str, &str)] = &[("react", "React"), ("next", "Next.js")];
}

/// Section validator constants
pub mod validation {
    /// Labels that must appear (case-insensitively) somewhere in an AGENTS.md
    pub const REQUIRED_SECTIONS: &[&str] = &[
        "Authority",
        "Operating Mode",
        "Safety",
        "Persona",
        "Tech Stack",
        "Boundaries",
    ];
}

/// Template initializer constants
pub mod templates {
    /// Asset directory, relative to the installation root
    pub const ASSET_SUBDIR: &str = "assets/templates";

    /// Env var checked before any filesystem lookup
    pub const DIR_ENV: &str = "AGENTKIT_TEMPLATES_DIR";
}

/// Notebook initializer constants
pub mod notebook {
    pub const DEFAULT_PREFIX: &str = "research";

    pub const FILE_NAME: &str = "notebook.md";

    /// Folder timestamp (second resolution)
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

    /// Date line inside the notebook
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Placeholder left in the Objective section for manual editing
    pub const OBJECTIVE_PLACEHOLDER: &str = "[Insert Research Goal]";
}
