//! Validation command for recipe draft files.

use crate::cli::common::{CliError, CliResult};
use crate::export::render_summary;
use crate::models::{DraftRecipe, ValidRecipe};
use crate::validation::{self, ErrorMap};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate a recipe draft file
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to a JSON draft file (`-` reads standard input)
    #[arg(short, long, value_name = "FILE")]
    pub draft: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the validate command.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Whether the draft would be accepted
    pub valid: bool,
    /// Field key to message for every failing field
    pub errors: ErrorMap,
    /// The typed recipe when the draft is valid
    pub recipe: Option<ValidRecipe>,
}

impl ValidationResponse {
    /// Builds the response for a draft.
    pub fn for_draft(draft: &DraftRecipe) -> Self {
        match validation::check(draft) {
            Ok(recipe) => Self {
                valid: true,
                errors: ErrorMap::new(),
                recipe: Some(recipe),
            },
            Err(errors) => Self {
                valid: false,
                errors,
                recipe: None,
            },
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let draft = load_draft(&self.draft)
            .map_err(|e| CliError::io(format!("Failed to load draft: {e:#}")))?;

        let response = ValidationResponse::for_draft(&draft);
        debug!(
            valid = response.valid,
            errors = response.errors.len(),
            "validated draft {}",
            self.draft.display()
        );

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(recipe) = &response.recipe {
            println!("✓ Validation passed");
            println!();
            print!("{}", render_summary(recipe));
        } else {
            println!("✗ Validation failed");
            println!();
            for (key, issue) in response.errors.iter() {
                println!("  ✗ [{key}] {}", issue.message);
            }
        }

        if !response.valid {
            return Err(CliError::validation(format!(
                "Validation failed with {} error(s)",
                response.errors.len()
            )));
        }

        Ok(())
    }
}

/// Reads a draft from a JSON file, or from stdin when the path is `-`.
pub fn load_draft(path: &Path) -> anyhow::Result<DraftRecipe> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read draft from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .context(format!("Failed to read draft file: {}", path.display()))?
    };

    debug!(bytes = content.len(), "parsing draft");
    serde_json::from_str(&content).context(format!("Failed to parse draft: {}", path.display()))
}
