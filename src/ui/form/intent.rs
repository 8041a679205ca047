use crate::domain::{FieldValue, FormField, Vehicle};
use crate::ui::form::state::FormMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open the form with a fresh default draft. For an edit session the
    /// controller issues the record load separately.
    Open { mode: FormMode, epoch: u64 },
    /// The record load for an edit session finished; replaces the draft
    /// wholesale. Ignored when the epoch belongs to a previous session.
    RecordLoaded { epoch: u64, record: Vehicle },
    /// Overwrite one field (copy-on-write) and mark the draft modified.
    EditField { field: FormField, value: FieldValue },
    FocusNext,
    FocusPrev,
    /// User asked to leave; raises the confirmation modal when the draft
    /// has unsaved edits.
    RequestClose,
    /// User chose to keep editing.
    CancelClose,
}

impl Intent for FormIntent {}
