//! Recipe draft validation.
//!
//! [`validate`] maps a draft to an [`ErrorMap`] holding one message per
//! invalid field. Every rule runs on every call; nothing short-circuits, so a
//! single submit attempt reports every problem at once. [`check`] runs the same
//! rules and, when nothing is wrong, hands back the typed [`ValidRecipe`].

pub mod number;
pub mod url;

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::options::{Category, Cuisine, Difficulty, OptionSet, Unit};
use crate::models::recipe::{
    DraftRecipe, IngredientField, IngredientRow, ScalarField, SubmittedRecipe, ValidIngredient,
    ValidRecipe,
};

pub use number::parse_number;
pub use url::is_valid_url;

const TITLE_LENGTH: (usize, usize) = (3, 50);
const DESCRIPTION_LENGTH: (usize, usize) = (10, 500);
const SERVINGS_RANGE: (f64, f64) = (1.0, 20.0);
const QUANTITY_RANGE: (f64, f64) = (0.1, 1000.0);
const INGREDIENT_NAME_MIN: usize = 2;
const INSTRUCTION_MIN: usize = 5;

/// Identifies the input an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// A scalar field
    Field(ScalarField),
    /// One part of the ingredient row at a position
    Ingredient(usize, IngredientField),
    /// The instruction step at a position
    Instruction(usize),
}

impl FieldKey {
    /// Parses the textual form produced by `Display`.
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(field) = ScalarField::from_key(key) {
            return Some(Self::Field(field));
        }
        let (name, index) = key.rsplit_once('-')?;
        let index = index.parse().ok()?;
        match name {
            "ingredientName" => Some(Self::Ingredient(index, IngredientField::Name)),
            "ingredientQty" => Some(Self::Ingredient(index, IngredientField::Quantity)),
            "ingredientUnit" => Some(Self::Ingredient(index, IngredientField::Unit)),
            "instruction" => Some(Self::Instruction(index)),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.write_str(field.key()),
            Self::Ingredient(index, IngredientField::Name) => write!(f, "ingredientName-{index}"),
            Self::Ingredient(index, IngredientField::Quantity) => {
                write!(f, "ingredientQty-{index}")
            }
            Self::Ingredient(index, IngredientField::Unit) => write!(f, "ingredientUnit-{index}"),
            Self::Instruction(index) => write!(f, "instruction-{index}"),
        }
    }
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Nothing was entered for a required field
    Required,
    /// Text is too short or too long
    LengthOutOfRange,
    /// Numeric text does not parse
    NotANumber,
    /// Number lies outside the accepted range
    OutOfRange,
    /// Value is not one of the offered options
    InvalidSelection,
    /// URL is not well formed
    MalformedUrl,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// What went wrong
    pub kind: IssueKind,
    /// Message shown under the field
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validation failures keyed by field. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldKey, ValidationIssue>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Issue recorded for a field.
    pub fn get(&self, key: FieldKey) -> Option<&ValidationIssue> {
        self.0.get(&key)
    }

    /// Message recorded for a field.
    pub fn message(&self, key: FieldKey) -> Option<&str> {
        self.get(key).map(|issue| issue.message.as_str())
    }

    /// Message recorded under a textual key such as `ingredientQty-1`.
    pub fn message_for(&self, key: &str) -> Option<&str> {
        FieldKey::parse(key).and_then(|key| self.message(key))
    }

    /// Whether a field has an error.
    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Iterates over the failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &ValidationIssue)> {
        self.0.iter().map(|(key, issue)| (*key, issue))
    }

    /// Textual keys of every failing field.
    pub fn keys(&self) -> Vec<String> {
        self.0.keys().map(ToString::to_string).collect()
    }

    fn insert(&mut self, key: FieldKey, issue: ValidationIssue) {
        self.0.insert(key, issue);
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(key, issue)| (key.to_string(), issue.message.as_str())),
        )
    }
}

/// Validates the whole draft.
pub fn validate(draft: &DraftRecipe) -> ErrorMap {
    check(draft).err().unwrap_or_default()
}

/// Validates the draft and stamps it as submitted when it passes.
pub fn accept(draft: &DraftRecipe) -> Result<SubmittedRecipe, ErrorMap> {
    check(draft).map(SubmittedRecipe::new)
}

/// Validates the draft, returning the typed recipe when every rule passes.
pub fn check(draft: &DraftRecipe) -> Result<ValidRecipe, ErrorMap> {
    let mut errors = ErrorMap::new();

    let title = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Title),
        check_length(&draft.title, "Title", TITLE_LENGTH.0, Some(TITLE_LENGTH.1), true),
    );
    let description = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Description),
        check_length(
            &draft.description,
            "Description",
            DESCRIPTION_LENGTH.0,
            Some(DESCRIPTION_LENGTH.1),
            true,
        ),
    );
    let servings = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Servings),
        check_number(&draft.servings, "Servings", SERVINGS_RANGE),
    );
    let difficulty = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Difficulty),
        check_select::<Difficulty>(&draft.difficulty, "Difficulty", "difficulty"),
    );
    let category = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Category),
        check_select::<Category>(&draft.category, "Category", "category"),
    );
    let cuisine = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::Cuisine),
        check_select::<Cuisine>(&draft.cuisine, "Cuisine type", "cuisine type"),
    );
    let image_url = record_issue(
        &mut errors,
        FieldKey::Field(ScalarField::ImageUrl),
        check_image_url(&draft.image_url),
    );

    let ingredients: Vec<Option<ValidIngredient>> = draft
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, row)| check_ingredient(&mut errors, index, row))
        .collect();

    let instructions: Vec<Option<String>> = draft
        .instructions
        .iter()
        .enumerate()
        .map(|(index, step)| {
            record_issue(
                &mut errors,
                FieldKey::Instruction(index),
                check_length(step, "Step", INSTRUCTION_MIN, None, false),
            )
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    let (
        Some(title),
        Some(description),
        Some(servings),
        Some(difficulty),
        Some(category),
        Some(cuisine),
        Some(image_url),
        Some(ingredients),
        Some(instructions),
    ) = (
        title,
        description,
        servings,
        difficulty,
        category,
        cuisine,
        image_url,
        ingredients.into_iter().collect::<Option<Vec<_>>>(),
        instructions.into_iter().collect::<Option<Vec<_>>>(),
    )
    else {
        return Err(errors);
    };

    Ok(ValidRecipe {
        title,
        description,
        servings,
        servings_text: draft.servings.clone(),
        difficulty,
        category,
        cuisine,
        image_url,
        ingredients,
        instructions,
    })
}

fn record_issue<T>(
    errors: &mut ErrorMap,
    key: FieldKey,
    result: Result<T, ValidationIssue>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            errors.insert(key, issue);
            None
        }
    }
}

fn check_ingredient(
    errors: &mut ErrorMap,
    index: usize,
    row: &IngredientRow,
) -> Option<ValidIngredient> {
    let name = record_issue(
        errors,
        FieldKey::Ingredient(index, IngredientField::Name),
        check_length(&row.name, "Ingredient name", INGREDIENT_NAME_MIN, None, false),
    );
    let quantity = record_issue(
        errors,
        FieldKey::Ingredient(index, IngredientField::Quantity),
        check_number(&row.quantity, "Quantity", QUANTITY_RANGE),
    );
    let unit = record_issue(
        errors,
        FieldKey::Ingredient(index, IngredientField::Unit),
        check_select::<Unit>(&row.unit, "Unit", "unit"),
    );

    Some(ValidIngredient {
        name: name?,
        quantity: quantity?,
        quantity_text: row.quantity.clone(),
        unit: unit?,
    })
}

/// Trimmed length in `[min, max]`. Returns the value as entered.
fn check_length(
    value: &str,
    subject: &str,
    min: usize,
    max: Option<usize>,
    required: bool,
) -> Result<String, ValidationIssue> {
    let trimmed = value.trim();
    if required && trimmed.is_empty() {
        return Err(ValidationIssue::new(
            IssueKind::Required,
            format!("{subject} is required"),
        ));
    }

    let length = trimmed.chars().count();
    if length < min {
        return Err(ValidationIssue::new(
            IssueKind::LengthOutOfRange,
            format!("{subject} must be at least {min} characters"),
        ));
    }
    if let Some(max) = max {
        if length > max {
            return Err(ValidationIssue::new(
                IssueKind::LengthOutOfRange,
                format!("{subject} must be {max} characters or less"),
            ));
        }
    }

    Ok(value.to_string())
}

/// Non-empty numeric text within `range` (inclusive).
fn check_number(value: &str, subject: &str, range: (f64, f64)) -> Result<f64, ValidationIssue> {
    if value.is_empty() {
        return Err(ValidationIssue::new(
            IssueKind::Required,
            format!("{subject} is required"),
        ));
    }

    let Some(number) = parse_number(value) else {
        return Err(ValidationIssue::new(
            IssueKind::NotANumber,
            format!("{subject} must be a number"),
        ));
    };

    let (min, max) = range;
    if number < min || number > max {
        return Err(ValidationIssue::new(
            IssueKind::OutOfRange,
            format!("{subject} must be between {min} and {max}"),
        ));
    }

    Ok(number)
}

fn check_select<T: OptionSet>(
    value: &str,
    subject: &str,
    noun: &str,
) -> Result<T, ValidationIssue> {
    if value.is_empty() {
        return Err(ValidationIssue::new(
            IssueKind::Required,
            format!("{subject} is required"),
        ));
    }
    T::from_label(value).ok_or_else(|| {
        ValidationIssue::new(
            IssueKind::InvalidSelection,
            format!("Please choose a valid {noun}"),
        )
    })
}

fn check_image_url(value: &str) -> Result<Option<String>, ValidationIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if is_valid_url(trimmed) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(ValidationIssue::new(
            IssueKind::MalformedUrl,
            "Please enter a valid URL",
        ))
    }
}
