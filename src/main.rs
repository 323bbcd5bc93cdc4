//! Recipe Form - terminal recipe submission form
//!
//! Without a subcommand the interactive form opens. Subcommands validate
//! draft files and manage the configuration without a terminal UI.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use recipe_form::cli::{CliError, CliResult, ConfigArgs, OptionsArgs, ValidateArgs};
use recipe_form::config::Config;
use recipe_form::constants::APP_BINARY_NAME;
use recipe_form::logging::{self, LogTarget};
use recipe_form::tui;

/// Recipe Form - enter and validate recipe submissions
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a draft recipe JSON file
    Validate(ValidateArgs),
    /// List the choices for difficulty, category, cuisine and unit
    Options(OptionsArgs),
    /// Inspect or change the configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(ref command) => run_command(&cli, command),
        None => run_interactive(&cli).map_err(|e| CliError::io(format!("{e:#}"))),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(err.exit_code.code());
    }
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::config_file_path(),
    }
}

/// Runs a headless subcommand with logs on stderr.
fn run_command(cli: &Cli, command: &Command) -> CliResult<()> {
    let path = config_path(cli).map_err(|e| CliError::io(format!("{e:#}")))?;

    // Malformed files fall back to defaults here; `config show` reports them.
    let config = Config::load_from(&path).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring configuration ({e:#})");
        Config::default()
    });
    logging::init(&config.logging.level, cli.verbose, &LogTarget::Stderr)
        .map_err(|e| CliError::io(format!("{e:#}")))?;
    debug!(config = %path.display(), "running {command:?}");

    match command {
        Command::Validate(args) => args.execute(),
        Command::Options(args) => args.execute(),
        Command::Config(args) => args.execute(&path),
    }
}

/// Opens the interactive form with logs written to a file.
fn run_interactive(cli: &Cli) -> Result<()> {
    let path = config_path(cli)?;
    let config = Config::load_from(&path)?;

    let log_file = config.logging.resolved_file()?;
    logging::init(&config.logging.level, cli.verbose, &LogTarget::File(log_file))?;
    if cli.config.is_some() && !path.exists() {
        warn!(config = %path.display(), "configuration file not found, using defaults");
    }

    let mut state = tui::AppState::new(config);
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
