//! Data models for recipe drafts and the option sets they draw from.
//!
//! Models are independent of the UI; the terminal form and the command line
//! both work on these types.

pub mod options;
pub mod recipe;

// Re-export all model types
pub use options::{Category, Cuisine, Difficulty, OptionSet, Unit};
pub use recipe::{
    DraftEdit, DraftRecipe, IngredientField, IngredientPatch, IngredientRow, ScalarField,
    SubmittedRecipe, ValidIngredient, ValidRecipe,
};
