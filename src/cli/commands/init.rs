//! Init Command
//!
//! Seed an AGENTS.md from one of the shipped templates.

use std::path::{Path, PathBuf};

use crate::cli::ui::Output;
use crate::config::Config;
use crate::scaffold::{TemplateInitializer, TemplateKind};
use crate::types::Result;

pub fn run(config: &Config, kind: TemplateKind, output: &Path) -> Result<PathBuf> {
    let initializer = TemplateInitializer::from_config(&config.templates)?;
    tracing::debug!("Using templates from {}", initializer.source());

    let written = initializer.init(kind, output)?;

    let out = Output::new();
    out.success(&format!(
        "Created AGENTS.md at {} using '{}' template.",
        written.display(),
        kind
    ));
    out.hint("Next step: Open the file and fill in the [TODO] context placeholders.");

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplatesConfig;
    use crate::types::AgentKitError;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_dir(dir: &Path) -> Config {
        Config {
            templates: TemplatesConfig {
                dir: Some(dir.to_path_buf()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_copies_from_configured_dir() {
        let assets = TempDir::new().unwrap();
        fs::write(assets.path().join("flexible_agents_md.md"), "# [TODO] flexible").unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("AGENTS.md");

        run(&config_with_dir(assets.path()), TemplateKind::Flexible, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "# [TODO] flexible");
    }

    #[test]
    fn test_default_config_uses_shipped_template() {
        let out = TempDir::new().unwrap();
        let output = out.path().join("AGENTS.md");

        let written = run(&Config::default(), TemplateKind::Strict, &output).unwrap();

        assert_eq!(written, output);
        assert_eq!(
            fs::read(&output).unwrap(),
            fs::read(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/templates/strict_agents_md.md"))
                .unwrap()
        );
    }

    #[test]
    fn test_directory_output_reports_final_path() {
        let out = TempDir::new().unwrap();

        let written = run(&Config::default(), TemplateKind::Base, out.path()).unwrap();

        assert_eq!(written, out.path().join("base_agents_md.md"));
        assert!(written.is_file());
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let assets = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let err = run(
            &config_with_dir(assets.path()),
            TemplateKind::Strict,
            &out.path().join("AGENTS.md"),
        )
        .unwrap_err();
        assert!(matches!(err, AgentKitError::TemplateNotFound { .. }));
    }
}
