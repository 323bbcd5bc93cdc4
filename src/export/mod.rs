//! Export functionality for accepted recipes.
//!
//! Currently a plain-text summary shared by the terminal UI and the
//! command line.

pub mod summary;

pub use summary::{facts_line, ingredient_line, render_summary};
