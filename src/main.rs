use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docstub::cli::{Output, commands, project_dir};
use docstub::{CliOverrides, Config, ConfigFormat, ConfigLoader, DocStubError};

#[derive(Parser)]
#[command(name = "docstub")]
#[command(
    version,
    about = "Generate mkdocs API reference stubs from a package's module layout"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, help = "Generate individual documentation files for each module")]
    individual: bool,

    #[arg(long = "update-nav", help = "Update the navigation section of the site config")]
    update_nav: bool,

    #[arg(long = "docs-dir", help = "Documentation directory (default: docs)")]
    docs_dir: Option<PathBuf>,

    #[arg(long = "nav-file", help = "Site config holding the nav section (default: mkdocs.yml)")]
    nav_file: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    dry_run: bool,

    #[arg(long, short, global = true, help = "Config file (default: docstub.toml)")]
    config: Option<PathBuf>,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
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
            default_value = "toml",
            help = "Output format: toml, json, yaml"
        )]
        format: ConfigFormat,
    },
    /// Show configuration file paths
    Path,
    /// Write a default docstub.toml in the current directory
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
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

        eprintln!("\n{}", style("━━━ PANIC ━━━").red().bold());
        eprintln!("{}", style("docstub encountered an unexpected error:").red());
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "{}",
                style(format!(
                    "Location: {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                ))
                .dim()
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
            // Layout and config problems get one clean line; system failures
            // keep their full cause chain.
            let user_error = e
                .downcast_ref::<DocStubError>()
                .is_some_and(DocStubError::is_user_error);
            if user_error {
                eprintln!("{} {}", style("Error:").red(), e);
            } else {
                eprintln!("{} {:?}", style("Error:").red(), e);
            }
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
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = if cli.quiet {
        Output::quiet()
    } else {
        Output::new()
    };
    let project_dir = project_dir()?;

    match &cli.command {
        None => {
            let config = load_config(&cli)?;
            commands::generate::run(&config, &project_dir, cli.dry_run, &output)?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show { format } => {
                let config = load_config(&cli)?;
                commands::config::show(&config, *format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                commands::config::init(&project_dir, *force, &output)?;
            }
        },
    }

    Ok(())
}

/// Resolve configuration from files and environment, then apply CLI flags
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    config.apply_overrides(&CliOverrides {
        individual: cli.individual,
        update_nav: cli.update_nav,
        docs_dir: cli.docs_dir.clone(),
        nav_file: cli.nav_file.clone(),
    });
    config.validate()?;
    Ok(config)
}
