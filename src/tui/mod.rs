//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets of the recipe form using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod recipe_form;
pub mod status_bar;
pub mod summary_panel;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::form::{FormAction, FormPhase, FormStore, SubmitOutcome};
use crate::models::DraftEdit;

// Re-export TUI components
pub use component::Component;
pub use recipe_form::{FormFocus, RecipeForm, RecipeFormEvent};
pub use status_bar::StatusBar;
pub use summary_panel::SummaryPanel;
pub use theme::Theme;

/// Tone of the status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    /// Neutral information
    #[default]
    Info,
    /// An action succeeded
    Success,
    /// An action was refused
    Error,
}

/// Application state
pub struct AppState {
    /// Form data and submit state machine
    pub store: FormStore,
    /// Form component (focus)
    pub form: RecipeForm,
    /// Current UI theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Status bar message
    pub status_message: String,
    /// Tone of the status bar message
    pub status_kind: StatusKind,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a fresh, empty form.
    pub fn new(config: Config) -> Self {
        Self {
            store: FormStore::new(),
            form: RecipeForm::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            status_message: "Fill in the recipe and press Ctrl+S to submit".to_string(),
            status_kind: StatusKind::Info,
            should_quit: false,
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Dispatches an action to the store and updates focus and status.
    pub fn apply(&mut self, action: FormAction) {
        if let Some(message) = self.refused_removal(&action) {
            debug!("{message}");
            self.set_status(StatusKind::Error, message);
            return;
        }

        let outcome = self.store.dispatch(action.clone());
        self.form
            .after_action(&action, outcome.as_ref(), &self.store);

        match (&action, outcome) {
            (_, Some(SubmitOutcome::Accepted(recipe))) => self.set_status(
                StatusKind::Success,
                format!("Recipe \"{}\" submitted", recipe.recipe.title.trim()),
            ),
            (_, Some(SubmitOutcome::Rejected(errors))) => {
                let noun = if errors.len() == 1 { "field" } else { "fields" };
                self.set_status(
                    StatusKind::Error,
                    format!("Please fix {} {noun} before submitting", errors.len()),
                );
            }
            (FormAction::Reset, None) => self.set_status(StatusKind::Info, "Form cleared"),
            _ => {}
        }
    }

    /// Message for a removal that would leave a list empty.
    fn refused_removal(&self, action: &FormAction) -> Option<&'static str> {
        let draft = self.store.draft();
        match action {
            FormAction::Edit(DraftEdit::RemoveIngredient(_)) if draft.ingredients.len() <= 1 => {
                Some("A recipe needs at least one ingredient row")
            }
            FormAction::Edit(DraftEdit::RemoveInstruction(_)) if draft.instructions.len() <= 1 => {
                Some("A recipe needs at least one step")
            }
            _ => None,
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("interactive form started");

    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("interactive form closed");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Form and summary
            Constraint::Length(StatusBar::height(state.config.ui.show_help)),
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    state
        .form
        .render(f, panes[0], &state.theme, &state.store);
    SummaryPanel::render(f, panes[1], &state.store, &state.theme);

    StatusBar::render(f, chunks[2], state, &state.theme);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let (phase, color) = match state.store.phase() {
        FormPhase::Editing => ("Editing", theme.text_secondary),
        FormPhase::Submitted => ("Submitted ✓", theme.success),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(phase, Style::default().fg(color)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(title, area);
}

/// Handle keyboard input events. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Ignore release/repeat reports from terminals that send them
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match state.form.handle_input(key, &state.store) {
        Some(RecipeFormEvent::Action(action)) => {
            state.apply(action);
            Ok(false)
        }
        Some(RecipeFormEvent::Quit) => {
            state.should_quit = true;
            Ok(true)
        }
        None => Ok(false),
    }
}
