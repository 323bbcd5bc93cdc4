//! Status bar widget for displaying status messages and key help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::recipe_form::FormFocus;
use super::{AppState, StatusKind, Theme};
use crate::models::{IngredientField, ScalarField};

/// Key hints shown regardless of focus.
const COMMON_HINTS: [(&str, &str); 4] = [
    ("Tab/↑↓", "Move"),
    ("Ctrl+S", "Submit"),
    ("Ctrl+R", "Clear"),
    ("Esc", "Quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Height the status bar needs, borders included.
    pub const fn height(show_help: bool) -> u16 {
        if show_help {
            4
        } else {
            3
        }
    }

    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let color = match state.status_kind {
            StatusKind::Info => theme.text_secondary,
            StatusKind::Success => theme.success,
            StatusKind::Error => theme.error,
        };

        let mut lines = vec![Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(color),
        ))];
        if state.config.ui.show_help {
            lines.push(Self::help_line(state.form.focus(), theme));
        }

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Hints for the focused element followed by the common ones.
    pub fn hints(focus: FormFocus) -> Vec<(&'static str, &'static str)> {
        let mut hints = match focus {
            FormFocus::Field(
                ScalarField::Difficulty | ScalarField::Category | ScalarField::Cuisine,
            ) => vec![("←/→", "Choose")],
            FormFocus::Field(ScalarField::Description) => vec![("Enter", "New line")],
            FormFocus::Ingredient(_, IngredientField::Unit) => {
                vec![("←/→", "Choose"), ("Ctrl+N", "Add row"), ("Ctrl+D", "Remove row")]
            }
            FormFocus::Ingredient(..) | FormFocus::Instruction(_) => {
                vec![("Ctrl+N", "Add row"), ("Ctrl+D", "Remove row")]
            }
            FormFocus::AddIngredient | FormFocus::AddInstruction => vec![("Enter", "Add row")],
            FormFocus::Submit => vec![("Enter", "Submit")],
            FormFocus::Field(_) => Vec::new(),
        };
        hints.extend(COMMON_HINTS);
        hints
    }

    fn help_line(focus: FormFocus, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in Self::hints(focus).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
