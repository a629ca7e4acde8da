use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agentkit::TemplateKind;
use agentkit::cli::commands::{analyze::AnalyzeOptions, validate::ValidateOptions};

/// Parse template kind from string
fn parse_template_kind(s: &str) -> Result<TemplateKind, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "agentkit")]
#[command(
    version,
    about = "Scaffold, analyze and validate AGENTS.md files and research notebooks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Additional config file (TOML)")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a codebase and save AGENTS.md context as JSON
    Analyze {
        #[arg(long, help = "Path to repository root")]
        path: PathBuf,
        #[arg(long, help = "Output JSON file path")]
        output: PathBuf,
        #[arg(long, help = "Maximum path depth in the structure preview")]
        max_depth: Option<usize>,
        #[arg(long, help = "Sort the structure preview")]
        sort: bool,
    },

    /// Initialize AGENTS.md from a template
    Init {
        #[arg(
            long,
            default_value = "base",
            value_parser = parse_template_kind,
            help = "Template type: base, strict, flexible"
        )]
        template: TemplateKind,
        #[arg(long, help = "Output path for AGENTS.md")]
        output: PathBuf,
    },

    /// Validate AGENTS.md structure
    Validate {
        #[arg(long, help = "Path to AGENTS.md")]
        file: PathBuf,
        #[arg(long, help = "Exit with an error when validation fails")]
        strict: bool,
        #[arg(long, help = "Also write the result as JSON")]
        report: Option<PathBuf>,
    },

    /// Create a timestamped research notebook folder
    Notebook {
        #[arg(help = "Research session name")]
        session_name: String,
        #[arg(help = "Directory to create the session folder in")]
        base_path: PathBuf,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31magentkit encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            agentkit::cli::Output::new().error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = agentkit::ConfigLoader::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            path,
            output,
            max_depth,
            sort,
        } => {
            agentkit::cli::commands::analyze::run(
                &config,
                AnalyzeOptions {
                    path: &path,
                    output: &output,
                    max_depth,
                    sort,
                },
            )?;
        }
        Commands::Init { template, output } => {
            agentkit::cli::commands::init::run(&config, template, &output)?;
        }
        Commands::Validate {
            file,
            strict,
            report,
        } => {
            agentkit::cli::commands::validate::run(ValidateOptions {
                file: &file,
                strict,
                report: report.as_deref(),
            })?;
        }
        Commands::Notebook {
            session_name,
            base_path,
        } => {
            agentkit::cli::commands::notebook::run(&config, &session_name, &base_path)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                agentkit::cli::commands::config::show(&config, &format)?;
            }
            ConfigAction::Path => {
                agentkit::cli::commands::config::path()?;
            }
        },
    }

    Ok(())
}
