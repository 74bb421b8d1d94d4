//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::check::{self, CheckArgs};
use super::output::{Output, OutputFormat};
use super::{script, tui};
use crate::board::Board;
use crate::config::Config;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BOARD_LOG";

#[derive(Parser)]
#[command(name = "board")]
#[command(author, version, about = "Project board with active and finished lists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive board (default)
    Tui,

    /// Run a board script ("-" reads stdin)
    Run {
        /// Script file
        script: PathBuf,
    },

    /// Check a value against validation constraints
    Check(CheckArgs),

    /// Show the effective configuration
    Config,

    /// Create a .board/config.toml with default settings
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // The TUI owns the terminal, so it gets no log output
    if !matches!(command, Commands::Tui) {
        init_logging(cli.verbose);
    }

    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format);

    tracing::debug!(project_root = ?config.project_root, "board starting");

    match command {
        Commands::Tui => tui::run(&config.board)?,

        Commands::Run { script } => {
            let mut board = Board::new(config.board.input.clone());
            script::run(&output, &mut board, &script)?
        }

        Commands::Check(args) => check::run(&args, &output)?,

        Commands::Config => show_config(&output, &config)?,

        Commands::Init { path } => init(&output, &path)?,
    }

    tracing::debug!("command completed");
    Ok(())
}

/// Installs the stderr log subscriber
///
/// `BOARD_LOG` takes precedence; otherwise `--verbose` selects debug and the
/// default is warn.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn show_config(output: &Output, config: &Config) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "project_root": config.project_root.as_ref().map(|p| p.display().to_string()),
            "board": config.board,
            "global": config.global,
        }));
        return Ok(());
    }

    match &config.project_root {
        Some(root) => output.line(&format!("# project root: {}", root.display())),
        None => output.line("# no project found, using defaults"),
    }
    output.line(&toml::to_string_pretty(&config.board)?);
    Ok(())
}

fn init(output: &Output, path: &Path) -> Result<()> {
    let config_path = Config::init(path)?;
    tracing::debug!(path = %config_path.display(), "config written");

    if output.is_json() {
        output.data(&serde_json::json!({
            "initialized": true,
            "config": config_path.display().to_string(),
        }));
    } else {
        output.success(&format!("Initialized board at {}", path.display()));
    }
    Ok(())
}
