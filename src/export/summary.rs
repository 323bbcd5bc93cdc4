//! Read-only summary of an accepted recipe.
//!
//! Produces the plain-text card shown after a successful submit: title,
//! the servings/difficulty/category/cuisine line, description, optional
//! image, ingredients and numbered steps.

use crate::models::{ValidIngredient, ValidRecipe};
use std::fmt::Write as _;

/// Formats one ingredient as `<quantity> <unit> — <name>`.
pub fn ingredient_line(ingredient: &ValidIngredient) -> String {
    format!(
        "{} {} — {}",
        ingredient.quantity_text.trim(),
        ingredient.unit,
        ingredient.name.trim()
    )
}

/// Formats the facts line shown under the title.
pub fn facts_line(recipe: &ValidRecipe) -> String {
    format!(
        "Servings: {} | Difficulty: {} | Category: {} | Cuisine: {}",
        recipe.servings_text.trim(),
        recipe.difficulty,
        recipe.category,
        recipe.cuisine
    )
}

/// Renders the full summary as plain text.
///
/// # Example
///
/// ```
/// use recipe_form::export::render_summary;
/// use recipe_form::models::{Category, Cuisine, Difficulty, Unit, ValidIngredient, ValidRecipe};
///
/// let recipe = ValidRecipe {
///     title: "Tomato Soup".into(),
///     description: "A rich tomato soup with basil".into(),
///     servings: 4.0,
///     servings_text: "4".into(),
///     difficulty: Difficulty::Easy,
///     category: Category::MainCourse,
///     cuisine: Cuisine::Italian,
///     image_url: None,
///     ingredients: vec![ValidIngredient {
///         name: "Tomato".into(),
///         quantity: 2.0,
///         quantity_text: "2".into(),
///         unit: Unit::Pounds,
///     }],
///     instructions: vec!["Simmer tomatoes for 20 minutes.".into()],
/// };
/// assert!(render_summary(&recipe).contains("2 pounds — Tomato"));
/// ```
pub fn render_summary(recipe: &ValidRecipe) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", recipe.title.trim());
    let _ = writeln!(output, "{}", facts_line(recipe));
    output.push('\n');
    let _ = writeln!(output, "{}", recipe.description.trim());

    if let Some(url) = &recipe.image_url {
        output.push('\n');
        let _ = writeln!(output, "Image: {url}");
    }

    output.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(output, "- {}", ingredient_line(ingredient));
    }

    output.push_str("\nInstructions\n");
    for (number, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(output, "{}. {}", number + 1, step.trim());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Cuisine, Difficulty, Unit};

    fn soup() -> ValidRecipe {
        ValidRecipe {
            title: "Tomato Soup".into(),
            description: "A rich tomato soup with basil".into(),
            servings: 4.0,
            servings_text: "4".into(),
            difficulty: Difficulty::Easy,
            category: Category::MainCourse,
            cuisine: Cuisine::Italian,
            image_url: None,
            ingredients: vec![
                ValidIngredient {
                    name: "Tomato".into(),
                    quantity: 2.0,
                    quantity_text: "2".into(),
                    unit: Unit::Pounds,
                },
                ValidIngredient {
                    name: " Basil ".into(),
                    quantity: 0.5,
                    quantity_text: " 0.5".into(),
                    unit: Unit::Cups,
                },
            ],
            instructions: vec!["Simmer tomatoes for 20 minutes.".into(), "Blend.  ".into()],
        }
    }

    #[test]
    fn test_ingredient_line_format() {
        let recipe = soup();
        assert_eq!(ingredient_line(&recipe.ingredients[0]), "2 pounds — Tomato");
        assert_eq!(ingredient_line(&recipe.ingredients[1]), "0.5 cups — Basil");
    }

    #[test]
    fn test_summary_contains_all_sections() {
        let text = render_summary(&soup());
        assert!(text.starts_with("Tomato Soup\n"));
        assert!(text.contains(
            "Servings: 4 | Difficulty: Easy | Category: Main Course | Cuisine: Italian"
        ));
        assert!(text.contains("A rich tomato soup with basil"));
        assert!(text.contains("- 2 pounds — Tomato"));
        assert!(text.contains("1. Simmer tomatoes for 20 minutes."));
        assert!(text.contains("2. Blend."));
        assert!(!text.contains("Image:"));
    }

    #[test]
    fn test_summary_includes_image_when_present() {
        let mut recipe = soup();
        recipe.image_url = Some("https://img.example.com/soup.jpg".into());
        assert!(render_summary(&recipe).contains("Image: https://img.example.com/soup.jpg"));
    }
}
