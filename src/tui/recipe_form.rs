//! The recipe form: scalar inputs, ingredient and step editors, submit control.
//!
//! The form keeps only the focus. Every value it shows comes from the
//! [`FormStore`], and every change is emitted as a [`FormAction`] for the
//! application to dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::{FormAction, FormPhase, FormStore, RowId, SubmitOutcome};
use crate::models::{
    Category, Cuisine, Difficulty, DraftEdit, DraftRecipe, IngredientField, IngredientPatch,
    IngredientRow, OptionSet, ScalarField, Unit,
};
use crate::tui::{Component, Theme};
use crate::validation::{ErrorMap, FieldKey};

const INGREDIENT_PARTS: [IngredientField; 3] = [
    IngredientField::Name,
    IngredientField::Quantity,
    IngredientField::Unit,
];

const SELECT_PLACEHOLDER: &str = "Select...";

/// A focusable element of the form.
///
/// List rows are tracked by [`RowId`] so focus follows a row when rows
/// before it are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// A scalar input
    Field(ScalarField),
    /// One part of an ingredient row
    Ingredient(RowId, IngredientField),
    /// The "+ Add ingredient" control
    AddIngredient,
    /// An instruction step
    Instruction(RowId),
    /// The "+ Add step" control
    AddInstruction,
    /// The "Submit Recipe" control
    Submit,
}

/// Every focusable element in tab order.
pub fn focus_order(draft: &DraftRecipe) -> Vec<FormFocus> {
    let mut order: Vec<FormFocus> = ScalarField::ALL.into_iter().map(FormFocus::Field).collect();
    for row in draft.ingredients.rows() {
        order.extend(
            INGREDIENT_PARTS
                .into_iter()
                .map(|part| FormFocus::Ingredient(row.id, part)),
        );
    }
    order.push(FormFocus::AddIngredient);
    order.extend(
        draft
            .instructions
            .rows()
            .iter()
            .map(|row| FormFocus::Instruction(row.id)),
    );
    order.push(FormFocus::AddInstruction);
    order.push(FormFocus::Submit);
    order
}

/// How an input accepts keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Text,
    MultiLine,
    Numeric,
    Select(SelectKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectKind {
    Difficulty,
    Category,
    Cuisine,
    Unit,
}

impl SelectKind {
    fn cycle(self, current: &str, forward: bool) -> &'static str {
        match self {
            Self::Difficulty => cycle::<Difficulty>(current, forward),
            Self::Category => cycle::<Category>(current, forward),
            Self::Cuisine => cycle::<Cuisine>(current, forward),
            Self::Unit => cycle::<Unit>(current, forward),
        }
    }
}

fn cycle<T: OptionSet>(current: &str, forward: bool) -> &'static str {
    if forward {
        T::cycle_next(current)
    } else {
        T::cycle_previous(current)
    }
}

impl FormFocus {
    const fn input_kind(self) -> Option<InputKind> {
        match self {
            Self::Field(ScalarField::Title | ScalarField::ImageUrl)
            | Self::Ingredient(_, IngredientField::Name)
            | Self::Instruction(_) => Some(InputKind::Text),
            Self::Field(ScalarField::Description) => Some(InputKind::MultiLine),
            Self::Field(ScalarField::Servings) | Self::Ingredient(_, IngredientField::Quantity) => {
                Some(InputKind::Numeric)
            }
            Self::Field(ScalarField::Difficulty) => Some(InputKind::Select(SelectKind::Difficulty)),
            Self::Field(ScalarField::Category) => Some(InputKind::Select(SelectKind::Category)),
            Self::Field(ScalarField::Cuisine) => Some(InputKind::Select(SelectKind::Cuisine)),
            Self::Ingredient(_, IngredientField::Unit) => Some(InputKind::Select(SelectKind::Unit)),
            Self::AddIngredient | Self::AddInstruction | Self::Submit => None,
        }
    }

    /// Current text of the focused input.
    fn value(self, draft: &DraftRecipe) -> Option<&str> {
        match self {
            Self::Field(field) => Some(draft.field(field)),
            Self::Ingredient(id, part) => {
                let index = draft.ingredients.position_of(id)?;
                draft.ingredients.get(index).map(|row| row.field(part))
            }
            Self::Instruction(id) => {
                let index = draft.instructions.position_of(id)?;
                draft.instructions.get(index).map(String::as_str)
            }
            Self::AddIngredient | Self::AddInstruction | Self::Submit => None,
        }
    }

    /// The edit that stores `value` into the focused input.
    fn edit(self, draft: &DraftRecipe, value: String) -> Option<DraftEdit> {
        match self {
            Self::Field(field) => Some(DraftEdit::SetField(field, value)),
            Self::Ingredient(id, part) => draft
                .ingredients
                .position_of(id)
                .map(|index| DraftEdit::UpdateIngredient(index, IngredientPatch::set(part, value))),
            Self::Instruction(id) => draft
                .instructions
                .position_of(id)
                .map(|index| DraftEdit::UpdateInstruction(index, value)),
            Self::AddIngredient | Self::AddInstruction | Self::Submit => None,
        }
    }
}

/// Characters accepted by numeric inputs.
const fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Events emitted by the recipe form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFormEvent {
    /// Apply an action to the form store
    Action(FormAction),
    /// The user wants to leave the application
    Quit,
}

/// Recipe form component state.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    focus: FormFocus,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeForm {
    /// Creates the form with focus on the title.
    pub const fn new() -> Self {
        Self {
            focus: FormFocus::Field(ScalarField::Title),
        }
    }

    /// Currently focused element.
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Moves focus to the next element, wrapping at the end.
    pub fn focus_next(&mut self, draft: &DraftRecipe) {
        self.step_focus(draft, true);
    }

    /// Moves focus to the previous element, wrapping at the start.
    pub fn focus_previous(&mut self, draft: &DraftRecipe) {
        self.step_focus(draft, false);
    }

    fn step_focus(&mut self, draft: &DraftRecipe, forward: bool) {
        let order = focus_order(draft);
        let len = order.len();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus = order[next];
    }

    /// Updates focus after the application dispatched an action.
    ///
    /// A newly added row receives focus; after a removal focus moves to the
    /// row that took the removed row's place; a reset or an accepted submit
    /// returns focus to the title.
    pub fn after_action(
        &mut self,
        action: &FormAction,
        outcome: Option<&SubmitOutcome>,
        store: &FormStore,
    ) {
        let draft = store.draft();
        match action {
            FormAction::Edit(DraftEdit::AddIngredient) => {
                if let Some(row) = draft.ingredients.rows().last() {
                    self.focus = FormFocus::Ingredient(row.id, IngredientField::Name);
                }
            }
            FormAction::Edit(DraftEdit::AddInstruction) => {
                if let Some(row) = draft.instructions.rows().last() {
                    self.focus = FormFocus::Instruction(row.id);
                }
            }
            FormAction::Edit(DraftEdit::RemoveIngredient(index)) => {
                if let FormFocus::Ingredient(_, part) = self.focus {
                    let index = (*index).min(draft.ingredients.len().saturating_sub(1));
                    if let Some(id) = draft.ingredients.id_at(index) {
                        self.focus = FormFocus::Ingredient(id, part);
                    }
                }
            }
            FormAction::Edit(DraftEdit::RemoveInstruction(index)) => {
                if let FormFocus::Instruction(_) = self.focus {
                    let index = (*index).min(draft.instructions.len().saturating_sub(1));
                    if let Some(id) = draft.instructions.id_at(index) {
                        self.focus = FormFocus::Instruction(id);
                    }
                }
            }
            FormAction::Reset => self.focus = FormFocus::Field(ScalarField::Title),
            FormAction::Submit if outcome.is_some_and(SubmitOutcome::is_accepted) => {
                self.focus = FormFocus::Field(ScalarField::Title);
            }
            _ => {}
        }

        if !focus_order(draft).contains(&self.focus) {
            self.focus = FormFocus::Field(ScalarField::Title);
        }
    }

    fn add_row_action(&self) -> Option<DraftEdit> {
        match self.focus {
            FormFocus::Ingredient(..) | FormFocus::AddIngredient => Some(DraftEdit::AddIngredient),
            FormFocus::Instruction(_) | FormFocus::AddInstruction => {
                Some(DraftEdit::AddInstruction)
            }
            _ => None,
        }
    }

    fn remove_row_action(&self, draft: &DraftRecipe) -> Option<DraftEdit> {
        match self.focus {
            FormFocus::Ingredient(id, _) => draft
                .ingredients
                .position_of(id)
                .map(DraftEdit::RemoveIngredient),
            FormFocus::Instruction(id) => draft
                .instructions
                .position_of(id)
                .map(DraftEdit::RemoveInstruction),
            _ => None,
        }
    }

    fn activate(&mut self, draft: &DraftRecipe) -> Option<RecipeFormEvent> {
        match self.focus {
            FormFocus::AddIngredient => edit_event(DraftEdit::AddIngredient),
            FormFocus::AddInstruction => edit_event(DraftEdit::AddInstruction),
            FormFocus::Submit => Some(RecipeFormEvent::Action(FormAction::Submit)),
            FormFocus::Field(ScalarField::Description) => self.insert_char(draft, '\n'),
            _ => {
                self.focus_next(draft);
                None
            }
        }
    }

    fn insert_char(&self, draft: &DraftRecipe, c: char) -> Option<RecipeFormEvent> {
        let accepted = match self.focus.input_kind()? {
            InputKind::Text => c != '\n',
            InputKind::MultiLine => true,
            InputKind::Numeric => is_numeric_char(c),
            InputKind::Select(_) => false,
        };
        if !accepted {
            return None;
        }

        let mut value = self.focus.value(draft)?.to_string();
        value.push(c);
        self.focus.edit(draft, value).and_then(edit_event)
    }

    fn delete_char(&self, draft: &DraftRecipe) -> Option<RecipeFormEvent> {
        if matches!(self.focus.input_kind()?, InputKind::Select(_)) {
            return None;
        }
        let mut value = self.focus.value(draft)?.to_string();
        value.pop()?;
        self.focus.edit(draft, value).and_then(edit_event)
    }

    fn cycle_select(&self, draft: &DraftRecipe, forward: bool) -> Option<RecipeFormEvent> {
        let InputKind::Select(kind) = self.focus.input_kind()? else {
            return None;
        };
        let next = kind.cycle(self.focus.value(draft)?, forward);
        self.focus.edit(draft, next.to_string()).and_then(edit_event)
    }

    /// Lines of the form and the index of the last line belonging to the
    /// focused element, its error lines included.
    fn build_lines(&self, store: &FormStore, theme: &Theme) -> (Vec<Line<'static>>, usize) {
        let mut builder = LineBuilder::new(self.focus, store.errors(), theme);
        let draft = store.draft();

        for field in ScalarField::ALL {
            builder.scalar(field, draft.field(field));
        }

        builder.blank();
        builder.heading("Ingredients");
        for (index, row) in draft.ingredients.rows().iter().enumerate() {
            builder.ingredient(index, row.id, &row.value);
        }
        builder.control(FormFocus::AddIngredient, "+ Add ingredient");

        builder.blank();
        builder.heading("Instructions");
        for (index, row) in draft.instructions.rows().iter().enumerate() {
            builder.instruction(index, row.id, &row.value);
        }
        builder.control(FormFocus::AddInstruction, "+ Add step");

        builder.blank();
        builder.control(FormFocus::Submit, "[ Submit Recipe ]");

        (builder.lines, builder.focus_end)
    }
}

fn edit_event(edit: DraftEdit) -> Option<RecipeFormEvent> {
    Some(RecipeFormEvent::Action(FormAction::Edit(edit)))
}

impl Component for RecipeForm {
    type Context = FormStore;
    type Event = RecipeFormEvent;

    fn handle_input(&mut self, key: KeyEvent, store: &FormStore) -> Option<Self::Event> {
        let draft = store.draft();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(RecipeFormEvent::Quit),
                KeyCode::Char('s') => Some(RecipeFormEvent::Action(FormAction::Submit)),
                KeyCode::Char('r') => Some(RecipeFormEvent::Action(FormAction::Reset)),
                KeyCode::Char('n') => self.add_row_action().and_then(edit_event),
                KeyCode::Char('d') => self.remove_row_action(draft).and_then(edit_event),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(RecipeFormEvent::Quit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next(draft);
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous(draft);
                None
            }
            KeyCode::Enter => self.activate(draft),
            KeyCode::Left => self.cycle_select(draft, false),
            KeyCode::Right => self.cycle_select(draft, true),
            KeyCode::Backspace => self.delete_char(draft),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(draft, c)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, store: &FormStore) {
        let (lines, focus_end) = self.build_lines(store, theme);

        let title = match (store.errors().len(), store.phase()) {
            (0, FormPhase::Submitted) => " New Recipe ".to_string(),
            (0, FormPhase::Editing) => " Recipe ".to_string(),
            (1, _) => " Recipe (1 error) ".to_string(),
            (count, _) => format!(" Recipe ({count} errors) "),
        };
        let border_color = if store.errors().is_empty() {
            theme.primary
        } else {
            theme.error
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.background));

        // Keep the focused element and its errors on screen.
        let visible = area.height.saturating_sub(2) as usize;
        let offset = (focus_end + 1).saturating_sub(visible);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((offset as u16, 0));
        f.render_widget(paragraph, area);
    }
}

/// Accumulates the form's lines while tracking where focus lands.
struct LineBuilder<'a> {
    focus: FormFocus,
    errors: &'a ErrorMap,
    theme: &'a Theme,
    lines: Vec<Line<'static>>,
    focus_end: usize,
    in_focus: bool,
}

impl<'a> LineBuilder<'a> {
    fn new(focus: FormFocus, errors: &'a ErrorMap, theme: &'a Theme) -> Self {
        Self {
            focus,
            errors,
            theme,
            lines: Vec::new(),
            focus_end: 0,
            in_focus: false,
        }
    }

    fn push(&mut self, line: Line<'static>, focusable: Option<FormFocus>) {
        self.in_focus = focusable == Some(self.focus);
        if self.in_focus {
            self.focus_end = self.lines.len();
        }
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.in_focus = false;
        self.lines.push(Line::from(""));
    }

    fn heading(&mut self, text: &'static str) {
        self.in_focus = false;
        self.lines.push(Line::from(Span::styled(
            text,
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
    }

    fn marker(&self, focused: bool) -> Span<'static> {
        if focused {
            Span::styled("▶ ", Style::default().fg(self.theme.accent))
        } else {
            Span::raw("  ")
        }
    }

    fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text_secondary)
        }
    }

    fn error(&mut self, key: FieldKey, indent: usize) {
        if let Some(message) = self.errors.message(key) {
            if self.in_focus {
                self.focus_end = self.lines.len();
            }
            self.lines.push(Line::from(Span::styled(
                format!("{}✗ {message}", " ".repeat(indent)),
                Style::default().fg(self.theme.error),
            )));
        }
    }

    /// Spans for an input value; selects show the placeholder and arrows.
    fn value_spans(&self, kind: Option<InputKind>, value: &str, focused: bool) -> Vec<Span<'static>> {
        let text_style = if focused {
            Style::default()
                .fg(self.theme.text)
                .bg(self.theme.highlight_bg)
        } else {
            Style::default().fg(self.theme.text)
        };

        match kind {
            Some(InputKind::Select(_)) => {
                let (shown, style) = if value.is_empty() {
                    (SELECT_PLACEHOLDER.to_string(), text_style.fg(self.theme.text_muted))
                } else {
                    (value.to_string(), text_style)
                };
                if focused {
                    vec![
                        Span::styled("◀ ", Style::default().fg(self.theme.accent)),
                        Span::styled(shown, style),
                        Span::styled(" ▶", Style::default().fg(self.theme.accent)),
                    ]
                } else {
                    vec![Span::styled(shown, style)]
                }
            }
            _ if focused => vec![
                Span::styled(value.to_string(), text_style),
                Span::styled("█", Style::default().fg(self.theme.accent)),
            ],
            _ => vec![Span::styled(value.to_string(), text_style)],
        }
    }

    fn scalar(&mut self, field: ScalarField, value: &str) {
        let focus = FormFocus::Field(field);
        let focused = self.focus == focus;
        let kind = focus.input_kind();

        if kind == Some(InputKind::MultiLine) {
            let label = Line::from(vec![
                self.marker(focused),
                Span::styled(format!("{}:", field.label()), self.label_style(focused)),
            ]);
            self.push(label, None);

            let mut text_lines: Vec<&str> = value.split('\n').collect();
            let last = text_lines.pop().unwrap_or_default();
            for text in text_lines {
                self.lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(text.to_string(), Style::default().fg(self.theme.text)),
                ]));
            }
            let mut spans = vec![Span::raw("    ")];
            spans.extend(self.value_spans(kind, last, focused));
            self.push(Line::from(spans), Some(focus));
        } else {
            let mut spans = vec![
                self.marker(focused),
                Span::styled(format!("{}: ", field.label()), self.label_style(focused)),
            ];
            spans.extend(self.value_spans(kind, value, focused));
            self.push(Line::from(spans), Some(focus));
        }

        self.error(FieldKey::Field(field), 4);
    }

    fn ingredient(&mut self, index: usize, id: RowId, row: &IngredientRow) {
        let row_focused = matches!(self.focus, FormFocus::Ingredient(focus_id, _) if focus_id == id);
        let mut spans = vec![
            self.marker(row_focused),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(self.theme.text_muted),
            ),
        ];

        for (i, part) in INGREDIENT_PARTS.into_iter().enumerate() {
            let focus = FormFocus::Ingredient(id, part);
            let focused = self.focus == focus;
            let label = match part {
                IngredientField::Name => "Name",
                IngredientField::Quantity => "Qty",
                IngredientField::Unit => "Unit",
            };
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{label}: "), self.label_style(focused)));
            spans.extend(self.value_spans(focus.input_kind(), row.field(part), focused));
        }

        let focus_here = row_focused.then_some(self.focus);
        self.push(Line::from(spans), focus_here);

        for part in INGREDIENT_PARTS {
            self.error(FieldKey::Ingredient(index, part), 7);
        }
    }

    fn instruction(&mut self, index: usize, id: RowId, text: &str) {
        let focus = FormFocus::Instruction(id);
        let focused = self.focus == focus;
        let mut spans = vec![
            self.marker(focused),
            Span::styled(format!("Step {}: ", index + 1), self.label_style(focused)),
        ];
        spans.extend(self.value_spans(focus.input_kind(), text, focused));
        self.push(Line::from(spans), Some(focus));

        self.error(FieldKey::Instruction(index), 7);
    }

    fn control(&mut self, focus: FormFocus, text: &'static str) {
        let focused = self.focus == focus;
        let style = if focused {
            Style::default()
                .fg(self.theme.background)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.accent)
        };
        let line = Line::from(vec![self.marker(focused), Span::styled(text, style)]);
        self.push(line, Some(focus));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Feeds a key to the form and applies whatever it emits.
    fn press(form: &mut RecipeForm, store: &mut FormStore, event: KeyEvent) -> bool {
        match form.handle_input(event, store) {
            Some(RecipeFormEvent::Action(action)) => {
                let outcome = store.dispatch(action.clone());
                form.after_action(&action, outcome.as_ref(), store);
                false
            }
            Some(RecipeFormEvent::Quit) => true,
            None => false,
        }
    }

    fn type_text(form: &mut RecipeForm, store: &mut FormStore, text: &str) {
        for c in text.chars() {
            press(form, store, key(KeyCode::Char(c)));
        }
    }

    fn focus_on(form: &mut RecipeForm, store: &FormStore, target: FormFocus) {
        for _ in 0..focus_order(store.draft()).len() {
            if form.focus() == target {
                return;
            }
            form.focus_next(store.draft());
        }
        panic!("focus target {target:?} not reachable");
    }

    #[test]
    fn test_focus_order_lists_every_input() {
        let draft = DraftRecipe::new();
        let order = focus_order(&draft);
        // 7 scalars, 3 ingredient parts, add, 1 step, add, submit
        assert_eq!(order.len(), 14);
        assert_eq!(order[0], FormFocus::Field(ScalarField::Title));
        assert_eq!(order[order.len() - 1], FormFocus::Submit);
    }

    #[test]
    fn test_tab_wraps_around() {
        let mut form = RecipeForm::new();
        let draft = DraftRecipe::new();
        form.focus_previous(&draft);
        assert_eq!(form.focus(), FormFocus::Submit);
        form.focus_next(&draft);
        assert_eq!(form.focus(), FormFocus::Field(ScalarField::Title));
    }

    #[test]
    fn test_typing_updates_title() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        type_text(&mut form, &mut store, "Soup");
        assert_eq!(store.draft().title, "Soup");

        press(&mut form, &mut store, key(KeyCode::Backspace));
        assert_eq!(store.draft().title, "Sou");
    }

    #[test]
    fn test_numeric_input_filters_characters() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::Field(ScalarField::Servings));

        type_text(&mut form, &mut store, "4x.5e1");
        assert_eq!(store.draft().servings, "4.5e1");
    }

    #[test]
    fn test_select_cycles_through_placeholder() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::Field(ScalarField::Difficulty));

        press(&mut form, &mut store, key(KeyCode::Right));
        assert_eq!(store.draft().difficulty, "Easy");
        press(&mut form, &mut store, key(KeyCode::Left));
        assert_eq!(store.draft().difficulty, "");
        press(&mut form, &mut store, key(KeyCode::Left));
        assert_eq!(store.draft().difficulty, "Hard");

        // Letters are ignored by selects
        press(&mut form, &mut store, key(KeyCode::Char('x')));
        assert_eq!(store.draft().difficulty, "Hard");
    }

    #[test]
    fn test_enter_in_description_inserts_newline() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::Field(ScalarField::Description));

        type_text(&mut form, &mut store, "One");
        press(&mut form, &mut store, key(KeyCode::Enter));
        type_text(&mut form, &mut store, "Two");
        assert_eq!(store.draft().description, "One\nTwo");
    }

    #[test]
    fn test_enter_on_text_field_moves_focus() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        press(&mut form, &mut store, key(KeyCode::Enter));
        assert_eq!(form.focus(), FormFocus::Field(ScalarField::Description));
    }

    #[test]
    fn test_add_ingredient_control_focuses_new_row() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::AddIngredient);

        press(&mut form, &mut store, key(KeyCode::Enter));
        assert_eq!(store.draft().ingredients.len(), 2);
        let new_id = store.draft().ingredients.id_at(1).unwrap();
        assert_eq!(
            form.focus(),
            FormFocus::Ingredient(new_id, IngredientField::Name)
        );

        type_text(&mut form, &mut store, "Basil");
        assert_eq!(store.draft().ingredients.get(1).unwrap().name, "Basil");
        assert_eq!(store.draft().ingredients.get(0).unwrap().name, "");
    }

    #[test]
    fn test_ctrl_n_adds_step_from_step_row() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        let first = store.draft().instructions.id_at(0).unwrap();
        focus_on(&mut form, &store, FormFocus::Instruction(first));

        press(&mut form, &mut store, ctrl('n'));
        assert_eq!(store.draft().instructions.len(), 2);
        let second = store.draft().instructions.id_at(1).unwrap();
        assert_eq!(form.focus(), FormFocus::Instruction(second));
    }

    #[test]
    fn test_ctrl_n_outside_lists_does_nothing() {
        let mut form = RecipeForm::new();
        let store = FormStore::new();
        assert_eq!(form.handle_input(ctrl('n'), &store), None);
    }

    #[test]
    fn test_ctrl_d_removes_focused_row_and_keeps_others() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        store.dispatch(FormAction::Edit(DraftEdit::AddIngredient));
        store.dispatch(FormAction::Edit(DraftEdit::AddIngredient));
        for (index, name) in ["Salt", "Pepper", "Oil"].into_iter().enumerate() {
            store.dispatch(FormAction::Edit(DraftEdit::UpdateIngredient(
                index,
                IngredientPatch::set(IngredientField::Name, name),
            )));
        }

        let middle = store.draft().ingredients.id_at(1).unwrap();
        let last = store.draft().ingredients.id_at(2).unwrap();
        focus_on(
            &mut form,
            &store,
            FormFocus::Ingredient(middle, IngredientField::Quantity),
        );

        press(&mut form, &mut store, ctrl('d'));
        let names: Vec<&str> = store
            .draft()
            .ingredients
            .iter()
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(names, vec!["Salt", "Oil"]);
        assert_eq!(
            form.focus(),
            FormFocus::Ingredient(last, IngredientField::Quantity)
        );
    }

    #[test]
    fn test_ctrl_d_on_only_row_is_noop() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        let only = store.draft().instructions.id_at(0).unwrap();
        focus_on(&mut form, &store, FormFocus::Instruction(only));
        type_text(&mut form, &mut store, "Stir");

        press(&mut form, &mut store, ctrl('d'));
        assert_eq!(store.draft().instructions.len(), 1);
        assert_eq!(store.draft().instructions.get(0).unwrap(), "Stir");
        assert_eq!(form.focus(), FormFocus::Instruction(only));
    }

    #[test]
    fn test_submit_and_reset_shortcuts() {
        let mut form = RecipeForm::new();
        let store = FormStore::new();
        assert_eq!(
            form.handle_input(ctrl('s'), &store),
            Some(RecipeFormEvent::Action(FormAction::Submit))
        );
        assert_eq!(
            form.handle_input(ctrl('r'), &store),
            Some(RecipeFormEvent::Action(FormAction::Reset))
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut form = RecipeForm::new();
        let store = FormStore::new();
        assert_eq!(
            form.handle_input(key(KeyCode::Esc), &store),
            Some(RecipeFormEvent::Quit)
        );
        assert_eq!(
            form.handle_input(ctrl('c'), &store),
            Some(RecipeFormEvent::Quit)
        );
    }

    #[test]
    fn test_reset_returns_focus_to_title() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::Submit);
        press(&mut form, &mut store, ctrl('r'));
        assert_eq!(form.focus(), FormFocus::Field(ScalarField::Title));
    }

    #[test]
    fn test_rejected_submit_keeps_focus() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::Submit);
        press(&mut form, &mut store, key(KeyCode::Enter));
        assert!(!store.errors().is_empty());
        assert_eq!(form.focus(), FormFocus::Submit);
    }

    #[test]
    fn test_errors_appear_in_lines() {
        let form = RecipeForm::new();
        let mut store = FormStore::new();
        store.submit();

        let (lines, _) = form.build_lines(&store, &Theme::dark());
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert!(text.iter().any(|l| l.contains("✗ Title is required")));
        assert!(text.iter().any(|l| l.contains("✗ Quantity is required")));
        assert!(text
            .iter()
            .any(|l| l.contains("✗ Step must be at least 5 characters")));
    }

    #[test]
    fn test_focus_end_covers_row_errors() {
        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        store.submit();
        let id = store.draft().ingredients.id_at(0).unwrap();
        focus_on(&mut form, &store, FormFocus::Ingredient(id, IngredientField::Name));

        let (lines, focus_end) = form.build_lines(&store, &Theme::dark());
        assert!(lines[focus_end - 3].to_string().contains("1. "));
        assert!(lines[focus_end - 2]
            .to_string()
            .contains("✗ Ingredient name must be at least 2 characters"));
        assert!(lines[focus_end - 1].to_string().contains("✗ Quantity is required"));
        assert!(lines[focus_end].to_string().contains("✗ Unit is required"));
    }

    #[test]
    fn test_focus_end_without_errors_is_the_focus_line() {
        let mut form = RecipeForm::new();
        let store = FormStore::new();
        focus_on(&mut form, &store, FormFocus::AddIngredient);

        let (lines, focus_end) = form.build_lines(&store, &Theme::dark());
        assert!(lines[focus_end].to_string().contains("+ Add ingredient"));
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_scroll_keeps_every_row_error_visible() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut form = RecipeForm::new();
        let mut store = FormStore::new();
        store.submit();
        let id = store.draft().ingredients.id_at(0).unwrap();
        focus_on(&mut form, &store, FormFocus::Ingredient(id, IngredientField::Unit));

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|f| form.render(f, f.area(), &Theme::dark(), &store))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Unit: "), "focused row visible:\n{text}");
        assert!(text.contains("✗ Unit is required"), "last row error visible:\n{text}");
    }
}
