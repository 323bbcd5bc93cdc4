//! Recipe Form Library
//!
//! This library provides the recipe submission form: the draft model and its
//! option sets, the form state store with its row list editors, the
//! validator, the summary renderer, and the terminal UI and headless
//! commands built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod form;
pub mod logging;
pub mod models;
pub mod tui;
pub mod validation;
