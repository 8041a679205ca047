use crate::domain::{FormField, VehicleDraft};
use crate::ui::mvi::UiState;

/// Whether the form creates a new record or edits an existing one.
///
/// The distinction is the presence of an id in the calling context and
/// decides the submission verb (create vs. update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

/// State of the record form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    /// The draft being edited; replaced wholesale when a load completes.
    pub draft: VehicleDraft,
    /// Index into [`FormField::ALL`] of the focused field.
    pub focused: usize,
    /// False until the first field edit after open/load.
    pub modified: bool,
    /// True while the discard-confirmation modal is showing.
    pub confirm_discard: bool,
    /// Stamp of the current form session; gates stale record loads.
    pub epoch: u64,
}

impl UiState for FormState {}

impl FormState {
    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub fn record_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }
}
