//! Form state store and the submit state machine.
//!
//! The store owns the current draft, the errors from the last submit attempt
//! and the last accepted recipe. All interaction goes through
//! [`FormStore::dispatch`]; draft edits produce a new draft value through
//! [`DraftRecipe::apply`] rather than editing fields in place.

use tracing::{debug, info, trace};

use crate::models::recipe::{DraftEdit, DraftRecipe, ScalarField, SubmittedRecipe};
use crate::validation::{self, ErrorMap};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// The user is filling in the draft
    #[default]
    Editing,
    /// The last submit was accepted and nothing has been edited since
    Submitted,
}

/// Something the user did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Change the draft
    Edit(DraftEdit),
    /// Validate and, if clean, accept the draft
    Submit,
    /// Discard the draft and any errors
    Reset,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft was valid and has been accepted
    Accepted(SubmittedRecipe),
    /// The draft has errors and stays in place
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    /// Whether the draft was accepted.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the state behind the recipe form.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    draft: DraftRecipe,
    errors: ErrorMap,
    submitted: Option<SubmittedRecipe>,
    phase: FormPhase,
}

impl FormStore {
    /// Creates a store holding an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft being edited.
    pub const fn draft(&self) -> &DraftRecipe {
        &self.draft
    }

    /// Errors from the last submit attempt.
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The most recently accepted recipe.
    pub const fn submitted(&self) -> Option<&SubmittedRecipe> {
        self.submitted.as_ref()
    }

    /// Current phase.
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Applies an action. Returns the outcome when the action was a submit.
    pub fn dispatch(&mut self, action: FormAction) -> Option<SubmitOutcome> {
        match action {
            FormAction::Edit(edit) => {
                self.edit(edit);
                None
            }
            FormAction::Submit => Some(self.submit()),
            FormAction::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Applies a single draft edit.
    pub fn edit(&mut self, edit: DraftEdit) {
        trace!(?edit, "applying draft edit");
        let draft = std::mem::take(&mut self.draft);
        self.draft = draft.apply(edit);
        if self.phase == FormPhase::Submitted {
            debug!("draft edited after submit, back to editing");
            self.phase = FormPhase::Editing;
        }
    }

    /// Replaces one scalar field.
    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        self.edit(DraftEdit::SetField(field, value.into()));
    }

    /// Validates the full draft and accepts it when there are no errors.
    ///
    /// On rejection the draft is untouched and the errors replace the previous
    /// ones. On acceptance the draft and errors are cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        match validation::accept(&self.draft) {
            Ok(recipe) => {
                info!(id = %recipe.id, title = %recipe.recipe.title, "recipe accepted");
                self.submitted = Some(recipe.clone());
                self.draft = DraftRecipe::new();
                self.errors = ErrorMap::new();
                self.phase = FormPhase::Submitted;
                SubmitOutcome::Accepted(recipe)
            }
            Err(errors) => {
                debug!(count = errors.len(), keys = ?errors.keys(), "submit rejected");
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Clears the draft and errors. The last accepted recipe is kept.
    pub fn reset(&mut self) {
        debug!("form reset");
        self.draft = DraftRecipe::new();
        self.errors = ErrorMap::new();
        self.phase = FormPhase::Editing;
    }
}
