//! AGENTS.md Template Initializer
//!
//! Copies one of the shipped template assets to a destination path. The
//! asset directory is located relative to the running executable, never the
//! working directory. Without one, the copies compiled into the binary are
//! written instead.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TemplatesConfig;
use crate::constants::templates::ASSET_SUBDIR;
use crate::types::{AgentKitError, Result};

const BUNDLED_BASE: &[u8] = include_bytes!("../../assets/templates/base_agents_md.md");
const BUNDLED_STRICT: &[u8] = include_bytes!("../../assets/templates/strict_agents_md.md");
const BUNDLED_FLEXIBLE: &[u8] = include_bytes!("../../assets/templates/flexible_agents_md.md");

/// Template flavours shipped under `assets/templates/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Base,
    Strict,
    Flexible,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Base, Self::Strict, Self::Flexible];

    /// Asset file name for this kind
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Base => "base_agents_md.md",
            Self::Strict => "strict_agents_md.md",
            Self::Flexible => "flexible_agents_md.md",
        }
    }

    /// Template body compiled into the binary
    pub fn bundled(self) -> &'static [u8] {
        match self {
            Self::Base => BUNDLED_BASE,
            Self::Strict => BUNDLED_STRICT,
            Self::Flexible => BUNDLED_FLEXIBLE,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Strict => write!(f, "strict"),
            Self::Flexible => write!(f, "flexible"),
        }
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "strict" => Ok(Self::Strict),
            "flexible" => Ok(Self::Flexible),
            _ => Err(format!(
                "Invalid template '{}'. Valid values: base, strict, flexible",
                s
            )),
        }
    }
}

/// Where template bodies are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// An asset directory on disk
    Dir(PathBuf),
    /// The copies compiled into the binary
    Bundled,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dir(dir) => write!(f, "{}", dir.display()),
            Self::Bundled => write!(f, "<bundled>"),
        }
    }
}

/// Locate the template source.
///
/// An explicit `templates.dir` wins, even if it does not exist. Otherwise the
/// candidates are `<exe_dir>/../assets/templates` and
/// `<exe_dir>/assets/templates`; the first that exists is used, and if neither
/// does the bundled copies are.
pub fn resolve_template_source(config: &TemplatesConfig) -> Result<TemplateSource> {
    if let Some(dir) = &config.dir {
        return Ok(TemplateSource::Dir(dir.clone()));
    }

    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(pick_candidate(template_dir_candidates(exe_dir)))
}

fn template_dir_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(parent) = exe_dir.parent() {
        candidates.push(parent.join(ASSET_SUBDIR));
    }
    candidates.push(exe_dir.join(ASSET_SUBDIR));
    candidates
}

fn pick_candidate(candidates: Vec<PathBuf>) -> TemplateSource {
    candidates
        .into_iter()
        .find(|c| c.is_dir())
        .map_or(TemplateSource::Bundled, TemplateSource::Dir)
}

/// Where a copy of `kind` lands: `output` itself, or the asset's file name
/// inside it when `output` is an existing directory
fn destination(kind: TemplateKind, output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(kind.file_name())
    } else {
        output.to_path_buf()
    }
}

/// Copies template assets to a destination
#[derive(Debug, Clone)]
pub struct TemplateInitializer {
    source: TemplateSource,
}

impl TemplateInitializer {
    /// Read templates from `template_dir`
    pub fn new<P: AsRef<Path>>(template_dir: P) -> Self {
        Self {
            source: TemplateSource::Dir(template_dir.as_ref().to_path_buf()),
        }
    }

    /// Use the templates compiled into the binary
    pub fn bundled() -> Self {
        Self {
            source: TemplateSource::Bundled,
        }
    }

    /// Build from configuration, resolving the directory next to the executable
    pub fn from_config(config: &TemplatesConfig) -> Result<Self> {
        Ok(Self {
            source: resolve_template_source(config)?,
        })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Full path of the asset backing `kind`, if it lives on disk
    pub fn source_path(&self, kind: TemplateKind) -> Option<PathBuf> {
        match &self.source {
            TemplateSource::Dir(dir) => Some(dir.join(kind.file_name())),
            TemplateSource::Bundled => None,
        }
    }

    /// Copy the `kind` template to `output`, replacing anything already there.
    /// An existing directory receives the asset under its own file name.
    /// Returns the path written.
    pub fn init<P: AsRef<Path>>(&self, kind: TemplateKind, output: P) -> Result<PathBuf> {
        let output = destination(kind, output.as_ref());

        match self.source_path(kind) {
            Some(source) => {
                if !source.is_file() {
                    return Err(AgentKitError::TemplateNotFound { path: source });
                }
                let bytes = fs::copy(&source, &output).map_err(|e| AgentKitError::Copy {
                    from: source.clone(),
                    to: output.clone(),
                    source: e,
                })?;
                debug!(
                    "Copied {} bytes from {} to {}",
                    bytes,
                    source.display(),
                    output.display()
                );
            }
            None => {
                fs::write(&output, kind.bundled()).map_err(|e| AgentKitError::Copy {
                    from: PathBuf::from(kind.file_name()),
                    to: output.clone(),
                    source: e,
                })?;
                debug!("Wrote bundled {} to {}", kind.file_name(), output.display());
            }
        }

        Ok(output)
    }
}
