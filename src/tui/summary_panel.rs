//! Read-only panel showing the last accepted recipe.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::export::{facts_line, ingredient_line};
use crate::form::FormStore;
use crate::models::SubmittedRecipe;
use crate::tui::Theme;

/// Summary panel widget
pub struct SummaryPanel;

impl SummaryPanel {
    /// Render the summary of the last submitted recipe, or a placeholder.
    pub fn render(f: &mut Frame, area: Rect, store: &FormStore, theme: &Theme) {
        let lines = match store.submitted() {
            Some(submitted) => Self::recipe_lines(submitted, theme),
            None => vec![Line::from(Span::styled(
                "No recipe submitted yet. Fill in the form and press Ctrl+S.",
                Style::default().fg(theme.text_muted),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Submitted Recipe ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(paragraph, area);
    }

    fn recipe_lines(submitted: &SubmittedRecipe, theme: &Theme) -> Vec<Line<'static>> {
        let recipe = &submitted.recipe;
        let heading = Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.text);

        let mut lines = vec![
            Line::from(Span::styled(
                recipe.title.trim().to_string(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                facts_line(recipe),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                format!(
                    "Submitted {} ({})",
                    submitted.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    submitted.id
                ),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(""),
        ];

        lines.extend(
            recipe
                .description
                .trim()
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), text))),
        );

        if let Some(url) = &recipe.image_url {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Image: ", Style::default().fg(theme.text_secondary)),
                Span::styled(url.clone(), text),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Ingredients", heading)));
        for ingredient in &recipe.ingredients {
            lines.push(Line::from(Span::styled(
                format!("- {}", ingredient_line(ingredient)),
                text,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Instructions", heading)));
        for (number, step) in recipe.instructions.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("{}. {}", number + 1, step.trim()),
                text,
            )));
        }

        lines
    }
}
