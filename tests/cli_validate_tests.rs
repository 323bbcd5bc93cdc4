//! End-to-end tests for `recipe-form validate` command.

use std::io::Write;
use std::process::{Command, Stdio};

mod fixtures;
use fixtures::*;

/// Path to the recipe-form binary
fn recipe_form_bin() -> &'static str {
    env!("CARGO_BIN_EXE_recipe-form")
}

fn run_validate(args: &[&str]) -> std::process::Output {
    let (config_path, _config_dir) = temp_config_path();
    Command::new(recipe_form_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("validate")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_validate_valid_draft() {
    let (draft_path, _temp_dir) = create_temp_draft_file(&tomato_soup_draft());

    let output = run_validate(&["--draft", draft_path.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid draft should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("Tomato Soup"));
    assert!(stdout.contains("2 pounds — Tomato"));
    assert!(stdout.contains("1. Simmer tomatoes for 20 minutes."));
}

#[test]
fn test_validate_valid_draft_json() {
    let (draft_path, _temp_dir) = create_temp_draft_file(&tomato_soup_draft());

    let output = run_validate(&["--draft", draft_path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["errors"], serde_json::json!({}));
    assert_eq!(result["recipe"]["title"], "Tomato Soup");
    assert_eq!(result["recipe"]["servings"], 4.0);
    assert_eq!(result["recipe"]["category"], "Main Course");
    assert_eq!(result["recipe"]["ingredients"][0]["unit"], "pounds");
    assert!(result["recipe"]["imageUrl"].is_null());
}

#[test]
fn test_validate_empty_draft_reports_every_field() {
    let (draft_path, _temp_dir) = create_temp_json_file("{}");

    let output = run_validate(&["--draft", draft_path.to_str().unwrap(), "--json"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid draft should exit with code 1"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false);
    assert!(result["recipe"].is_null());
    let errors = &result["errors"];
    assert_eq!(errors["title"], "Title is required");
    assert_eq!(errors["description"], "Description is required");
    assert_eq!(errors["servings"], "Servings is required");
    assert_eq!(errors["difficulty"], "Difficulty is required");
    assert_eq!(errors["category"], "Category is required");
    assert_eq!(errors["cuisine"], "Cuisine type is required");
    assert_eq!(errors["ingredientName-0"], "Ingredient name must be at least 2 characters");
    assert_eq!(errors["ingredientQty-0"], "Quantity is required");
    assert_eq!(errors["ingredientUnit-0"], "Unit is required");
    assert_eq!(errors["instruction-0"], "Step must be at least 5 characters");
    assert!(errors.get("imageUrl").is_none());
}

#[test]
fn test_validate_human_readable_failure_lists_issues() {
    let mut draft = tomato_soup_draft();
    draft.image_url = "not-a-url".to_string();
    let (draft_path, _temp_dir) = create_temp_draft_file(&draft);

    let output = run_validate(&["--draft", draft_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Validation failed"));
    assert!(stdout.contains("[imageUrl] Please enter a valid URL"));
    assert!(!stdout.contains("[title]"));
}

#[test]
fn test_validate_invalid_selection_from_file() {
    let mut draft = tomato_soup_draft();
    draft.category = "Brunch".to_string();
    let (draft_path, _temp_dir) = create_temp_draft_file(&draft);

    let output = run_validate(&["--draft", draft_path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["errors"]["category"], "Please choose a valid category");
}

#[test]
fn test_validate_missing_file() {
    let output = run_validate(&["--draft", "/nonexistent/draft.json"]);

    assert_eq!(
        output.status.code(),
        Some(2),
        "Missing file should exit with code 2"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load draft"));
}

#[test]
fn test_validate_malformed_json() {
    let (draft_path, _temp_dir) = create_temp_json_file("{ not json");

    let output = run_validate(&["--draft", draft_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_validate_reads_stdin() {
    let json = serde_json::to_string(&tomato_soup_draft()).unwrap();
    let (config_path, _config_dir) = temp_config_path();

    let mut child = Command::new(recipe_form_bin())
        .arg("--config")
        .arg(&config_path)
        .args(["validate", "--draft", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(json.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["valid"], true);
}
