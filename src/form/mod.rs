//! Form state: the draft store and the row-list editors it is built on.

pub mod rows;
pub mod store;

pub use rows::{Row, RowId, RowList};
pub use store::{FormAction, FormPhase, FormStore, SubmitOutcome};
