//! Shared test fixtures for recipe form tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use recipe_form::form::RowList;
use recipe_form::models::{DraftRecipe, IngredientRow};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The "Tomato Soup" recipe as a complete, valid draft.
pub fn tomato_soup_draft() -> DraftRecipe {
    DraftRecipe {
        title: "Tomato Soup".to_string(),
        description: "A rich tomato soup with basil".to_string(),
        servings: "4".to_string(),
        difficulty: "Easy".to_string(),
        category: "Main Course".to_string(),
        cuisine: "Italian".to_string(),
        image_url: String::new(),
        ingredients: RowList::from_values(vec![IngredientRow {
            name: "Tomato".to_string(),
            quantity: "2".to_string(),
            unit: "pounds".to_string(),
        }]),
        instructions: RowList::from_values(vec!["Simmer tomatoes for 20 minutes.".to_string()]),
    }
}

/// Writes a draft as pretty JSON into a fresh temp directory.
///
/// The `TempDir` must be kept alive for as long as the file is needed.
pub fn create_temp_draft_file(draft: &DraftRecipe) -> (PathBuf, TempDir) {
    let json = serde_json::to_string_pretty(draft).expect("Failed to serialize draft");
    create_temp_json_file(&json)
}

/// Writes raw text into `draft.json` inside a fresh temp directory.
pub fn create_temp_json_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("draft.json");
    fs::write(&path, content).expect("Failed to write draft file");
    (path, temp_dir)
}

/// A config file path inside a fresh temp directory. The file does not exist yet.
pub fn temp_config_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}
