//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Recipe Form";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "recipe-form";

/// Directory name used below the platform config directory.
pub const CONFIG_DIR_NAME: &str = "RecipeForm";

/// Default log file name written by the interactive UI.
pub const LOG_FILE_NAME: &str = "recipe-form.log";
