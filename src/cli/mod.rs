//! CLI command handlers for Recipe Form.
//!
//! Headless, scriptable access to the validator and configuration for
//! automation and CI pipelines.

pub mod common;
pub mod config;
pub mod options;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use options::OptionsArgs;
pub use validate::ValidateArgs;
