//! Fixed option sets offered by the select inputs of the recipe form.
//!
//! The labels are part of the user-facing contract: they are what the
//! select inputs display, what a draft stores, and what the summary shows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of choices rendered as a select input.
pub trait OptionSet: Copy + Eq + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Human-readable label, also used as the stored value.
    fn label(self) -> &'static str;

    /// Looks up an option by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|opt| opt.label() == label)
    }

    /// Labels of every option, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|opt| opt.label()).collect()
    }

    /// Returns the label following `current` when cycling forward.
    ///
    /// The empty string stands for the "Select..." placeholder and is part
    /// of the cycle. Unknown values restart at the placeholder.
    fn cycle_next(current: &str) -> &'static str {
        match Self::ALL.iter().position(|opt| opt.label() == current) {
            None if current.is_empty() => Self::ALL[0].label(),
            None => "",
            Some(idx) if idx + 1 == Self::ALL.len() => "",
            Some(idx) => Self::ALL[idx + 1].label(),
        }
    }

    /// Returns the label preceding `current` when cycling backward.
    fn cycle_previous(current: &str) -> &'static str {
        match Self::ALL.iter().position(|opt| opt.label() == current) {
            None if current.is_empty() => Self::ALL[Self::ALL.len() - 1].label(),
            None | Some(0) => "",
            Some(idx) => Self::ALL[idx - 1].label(),
        }
    }
}

/// Recipe difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    Medium,
    /// Hard
    Hard,
}

impl OptionSet for Difficulty {
    const ALL: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard];

    fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Recipe category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Appetizer
    Appetizer,
    /// Main Course
    #[serde(rename = "Main Course")]
    MainCourse,
    /// Dessert
    Dessert,
    /// Side Dish
    #[serde(rename = "Side Dish")]
    SideDish,
    /// Beverage
    Beverage,
}

impl OptionSet for Category {
    const ALL: &'static [Self] = &[
        Self::Appetizer,
        Self::MainCourse,
        Self::Dessert,
        Self::SideDish,
        Self::Beverage,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
            Self::SideDish => "Side Dish",
            Self::Beverage => "Beverage",
        }
    }
}

/// Cuisine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    /// American
    American,
    /// Italian
    Italian,
    /// Mexican
    Mexican,
    /// Asian
    Asian,
    /// Mediterranean
    Mediterranean,
    /// Other
    Other,
}

impl OptionSet for Cuisine {
    const ALL: &'static [Self] = &[
        Self::American,
        Self::Italian,
        Self::Mexican,
        Self::Asian,
        Self::Mediterranean,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::American => "American",
            Self::Italian => "Italian",
            Self::Mexican => "Mexican",
            Self::Asian => "Asian",
            Self::Mediterranean => "Mediterranean",
            Self::Other => "Other",
        }
    }
}

/// Unit of measure for an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// cups
    Cups,
    /// tablespoons
    Tablespoons,
    /// teaspoons
    Teaspoons,
    /// ounces
    Ounces,
    /// pounds
    Pounds,
    /// grams
    Grams,
    /// pieces
    Pieces,
}

impl OptionSet for Unit {
    const ALL: &'static [Self] = &[
        Self::Cups,
        Self::Tablespoons,
        Self::Teaspoons,
        Self::Ounces,
        Self::Pounds,
        Self::Grams,
        Self::Pieces,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Cups => "cups",
            Self::Tablespoons => "tablespoons",
            Self::Teaspoons => "teaspoons",
            Self::Ounces => "ounces",
            Self::Pounds => "pounds",
            Self::Grams => "grams",
            Self::Pieces => "pieces",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(Difficulty, Category, Cuisine, Unit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_sets_match_form_labels() {
        assert_eq!(Difficulty::labels(), vec!["Easy", "Medium", "Hard"]);
        assert_eq!(
            Category::labels(),
            vec!["Appetizer", "Main Course", "Dessert", "Side Dish", "Beverage"]
        );
        assert_eq!(
            Cuisine::labels(),
            vec!["American", "Italian", "Mexican", "Asian", "Mediterranean", "Other"]
        );
        assert_eq!(
            Unit::labels(),
            vec!["cups", "tablespoons", "teaspoons", "ounces", "pounds", "grams", "pieces"]
        );
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Category::from_label("Main Course"), Some(Category::MainCourse));
        assert_eq!(Category::from_label("main course"), None);
        assert_eq!(Unit::from_label("pounds"), Some(Unit::Pounds));
        assert_eq!(Unit::from_label(""), None);
    }

    #[test]
    fn test_cycle_next_wraps_through_placeholder() {
        assert_eq!(Difficulty::cycle_next(""), "Easy");
        assert_eq!(Difficulty::cycle_next("Easy"), "Medium");
        assert_eq!(Difficulty::cycle_next("Hard"), "");
        assert_eq!(Difficulty::cycle_next("Extreme"), "");
    }

    #[test]
    fn test_cycle_previous_wraps_through_placeholder() {
        assert_eq!(Cuisine::cycle_previous(""), "Other");
        assert_eq!(Cuisine::cycle_previous("American"), "");
        assert_eq!(Cuisine::cycle_previous("Italian"), "American");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::SideDish).unwrap();
        assert_eq!(json, "\"Side Dish\"");
        let unit: Unit = serde_json::from_str("\"grams\"").unwrap();
        assert_eq!(unit, Unit::Grams);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Category::MainCourse.to_string(), "Main Course");
        assert_eq!(Unit::Teaspoons.to_string(), "teaspoons");
    }
}
