//! Recipe data: the editable draft and the typed recipe produced on submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::rows::RowList;
use crate::models::options::{Category, Cuisine, Difficulty, Unit};

/// Scalar (non-list) fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarField {
    /// Recipe title
    Title,
    /// Free-form description
    Description,
    /// Number of servings (numeric text)
    Servings,
    /// Difficulty select
    Difficulty,
    /// Category select
    Category,
    /// Cuisine select
    Cuisine,
    /// Optional image URL
    ImageUrl,
}

impl ScalarField {
    /// All scalar fields in form order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Description,
        Self::Servings,
        Self::Difficulty,
        Self::Category,
        Self::Cuisine,
        Self::ImageUrl,
    ];

    /// Flat key used in error maps and draft files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Servings => "servings",
            Self::Difficulty => "difficulty",
            Self::Category => "category",
            Self::Cuisine => "cuisine",
            Self::ImageUrl => "imageUrl",
        }
    }

    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title *",
            Self::Description => "Description *",
            Self::Servings => "Servings (1-20) *",
            Self::Difficulty => "Difficulty *",
            Self::Category => "Category *",
            Self::Cuisine => "Cuisine *",
            Self::ImageUrl => "Image URL (optional)",
        }
    }

    /// Looks up a field by its flat key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Editable part of an ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IngredientField {
    /// Ingredient name
    Name,
    /// Quantity (numeric text)
    Quantity,
    /// Unit select
    Unit,
}

/// One ingredient line of the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientRow {
    /// Ingredient name
    pub name: String,
    /// Quantity as typed
    pub quantity: String,
    /// Selected unit label, empty when nothing is selected
    pub unit: String,
}

impl IngredientRow {
    /// The empty row used when a row is added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value of one part of the row.
    pub fn field(&self, field: IngredientField) -> &str {
        match field {
            IngredientField::Name => &self.name,
            IngredientField::Quantity => &self.quantity,
            IngredientField::Unit => &self.unit,
        }
    }
}

/// Partial update merged into an ingredient row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientPatch {
    /// New name, if changed
    pub name: Option<String>,
    /// New quantity, if changed
    pub quantity: Option<String>,
    /// New unit, if changed
    pub unit: Option<String>,
}

impl IngredientPatch {
    /// Patch touching a single part of the row.
    pub fn set(field: IngredientField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            IngredientField::Name => Self {
                name: value,
                ..Self::default()
            },
            IngredientField::Quantity => Self {
                quantity: value,
                ..Self::default()
            },
            IngredientField::Unit => Self {
                unit: value,
                ..Self::default()
            },
        }
    }

    /// Produces a new row with the patched parts replaced.
    pub fn merge(&self, row: &IngredientRow) -> IngredientRow {
        IngredientRow {
            name: self.name.clone().unwrap_or_else(|| row.name.clone()),
            quantity: self.quantity.clone().unwrap_or_else(|| row.quantity.clone()),
            unit: self.unit.clone().unwrap_or_else(|| row.unit.clone()),
        }
    }
}

/// A single edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    /// Replace a scalar field
    SetField(ScalarField, String),
    /// Merge a patch into the ingredient at the given position
    UpdateIngredient(usize, IngredientPatch),
    /// Append an empty ingredient row
    AddIngredient,
    /// Remove the ingredient at the given position
    RemoveIngredient(usize),
    /// Replace the text of the step at the given position
    UpdateInstruction(usize, String),
    /// Append an empty step
    AddInstruction,
    /// Remove the step at the given position
    RemoveInstruction(usize),
}

/// The in-progress recipe held by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftRecipe {
    /// Recipe title
    pub title: String,
    /// Description
    pub description: String,
    /// Servings as typed
    pub servings: String,
    /// Selected difficulty label
    pub difficulty: String,
    /// Selected category label
    pub category: String,
    /// Selected cuisine label
    pub cuisine: String,
    /// Image URL as typed
    pub image_url: String,
    /// Ingredient rows (never empty)
    pub ingredients: RowList<IngredientRow>,
    /// Instruction steps (never empty)
    pub instructions: RowList<String>,
}

impl DraftRecipe {
    /// Creates the empty draft shown on mount and after a successful submit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a scalar field.
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Title => &self.title,
            ScalarField::Description => &self.description,
            ScalarField::Servings => &self.servings,
            ScalarField::Difficulty => &self.difficulty,
            ScalarField::Category => &self.category,
            ScalarField::Cuisine => &self.cuisine,
            ScalarField::ImageUrl => &self.image_url,
        }
    }

    /// Returns the draft with one scalar field replaced.
    pub fn with_field(mut self, field: ScalarField, value: String) -> Self {
        let slot = match field {
            ScalarField::Title => &mut self.title,
            ScalarField::Description => &mut self.description,
            ScalarField::Servings => &mut self.servings,
            ScalarField::Difficulty => &mut self.difficulty,
            ScalarField::Category => &mut self.category,
            ScalarField::Cuisine => &mut self.cuisine,
            ScalarField::ImageUrl => &mut self.image_url,
        };
        *slot = value;
        self
    }

    /// Returns the draft with `edit` applied.
    ///
    /// Edits addressing a position that does not exist leave the draft as is,
    /// as does removing the only remaining row of a list.
    pub fn apply(mut self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::SetField(field, value) => return self.with_field(field, value),
            DraftEdit::UpdateIngredient(index, patch) => {
                self.ingredients.update_at(index, |row| patch.merge(row));
            }
            DraftEdit::AddIngredient => {
                self.ingredients.add_row();
            }
            DraftEdit::RemoveIngredient(index) => {
                self.ingredients.remove_at(index);
            }
            DraftEdit::UpdateInstruction(index, text) => {
                self.instructions.update_at(index, |_| text);
            }
            DraftEdit::AddInstruction => {
                self.instructions.add_row();
            }
            DraftEdit::RemoveInstruction(index) => {
                self.instructions.remove_at(index);
            }
        }
        self
    }
}

/// Ingredient of a recipe that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidIngredient {
    /// Ingredient name as entered
    pub name: String,
    /// Parsed quantity
    pub quantity: f64,
    /// Quantity text as entered, used for display
    pub quantity_text: String,
    /// Unit of measure
    pub unit: Unit,
}

/// A recipe that passed validation, with every field in its typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidRecipe {
    /// Title as entered
    pub title: String,
    /// Description as entered
    pub description: String,
    /// Parsed servings
    pub servings: f64,
    /// Servings text as entered, used for display
    pub servings_text: String,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Category
    pub category: Category,
    /// Cuisine
    pub cuisine: Cuisine,
    /// Trimmed image URL, if one was given
    pub image_url: Option<String>,
    /// Ingredients in entry order
    pub ingredients: Vec<ValidIngredient>,
    /// Instruction steps in entry order
    pub instructions: Vec<String>,
}

/// A recipe accepted by the form, shown back to the user as a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecipe {
    /// Random id of this submission
    pub id: Uuid,
    /// When the submission was accepted
    pub submitted_at: DateTime<Utc>,
    /// The accepted recipe
    #[serde(flatten)]
    pub recipe: ValidRecipe,
}

impl SubmittedRecipe {
    /// Stamps a validated recipe as submitted now.
    pub fn new(recipe: ValidRecipe) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            recipe,
        }
    }
}
