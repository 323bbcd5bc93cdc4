//! Lists the fixed option sets offered by the select inputs.

use crate::cli::common::{CliError, CliResult};
use crate::models::{Category, Cuisine, Difficulty, OptionSet, Unit};
use clap::Args;
use serde::Serialize;

/// List the choices for difficulty, category, cuisine and unit
#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Every option set, keyed the way draft files name the fields.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OptionsOutput {
    /// Difficulty labels
    pub difficulty: Vec<&'static str>,
    /// Category labels
    pub category: Vec<&'static str>,
    /// Cuisine labels
    pub cuisine: Vec<&'static str>,
    /// Unit labels
    pub unit: Vec<&'static str>,
}

impl OptionsOutput {
    /// Collects the option sets.
    pub fn collect() -> Self {
        Self {
            difficulty: Difficulty::labels(),
            category: Category::labels(),
            cuisine: Cuisine::labels(),
            unit: Unit::labels(),
        }
    }
}

impl OptionsArgs {
    /// Execute the options command
    pub fn execute(&self) -> CliResult<()> {
        let output = OptionsOutput::collect();

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Difficulty: {}", output.difficulty.join(", "));
        println!("Category:   {}", output.category.join(", "));
        println!("Cuisine:    {}", output.cuisine.join(", "));
        println!("Unit:       {}", output.unit.join(", "));
        Ok(())
    }
}
