//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file used by the interactive form
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Show the key help line in the status bar
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help: bool,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand against the given config file
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
            ConfigCommand::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        let config = Config::load_from(config_path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config, config_path)?;
        } else {
            output_human_readable(&config, config_path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        if self.theme.is_none()
            && self.log_level.is_none()
            && self.log_file.is_none()
            && self.show_help.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --log-level, --log-file, or --show-help",
            ));
        }

        // Parsed without validation; the updated config is validated below.
        let mut config = Config::read_from(config_path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.to_ascii_lowercase();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(show_help) = self.show_help {
            config.ui.show_help = show_help;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save_to(config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config, config_path: &Path) -> CliResult<()> {
    let output = ConfigOutput {
        path: config_path.to_string_lossy().to_string(),
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_help: config.ui.show_help,
        },
        logging: LoggingOutput {
            level: config.logging.level.clone(),
            file: config
                .logging
                .file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, config_path: &Path) {
    println!("Recipe Form Configuration");
    println!("=========================");
    println!("File: {}", config_path.display());
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Show Help:  {}", config.ui.show_help);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    match &config.logging.file {
        Some(file) => println!("  File:  {}", file.display()),
        None => println!("  File:  (default)"),
    }
}
