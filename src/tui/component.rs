//! Component trait pattern for TUI components.
//!
//! Components own their UI-only state (focus, cursor position) and read the
//! application data they display through a borrowed context. Changes to that
//! data are requested by emitting events for the parent to apply.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Shared data the component reads but does not own
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to the shared context.
    ///
    /// Returns `Some(Event)` when the parent has to act on the input.
    /// Returns `None` when the input was handled internally.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}
