use crate::domain::{FormField, VehicleDraft};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormMode, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { mode, epoch } => FormState {
                mode,
                epoch,
                ..FormState::default()
            },
            FormIntent::RecordLoaded { epoch, record } => {
                // A load can only belong to the current edit session;
                // anything else is a leftover from a closed form.
                if state.epoch != epoch || state.mode == FormMode::Create {
                    return state;
                }
                FormState {
                    draft: VehicleDraft::from_record(&record),
                    modified: false,
                    ..state
                }
            }
            FormIntent::EditField { field, value } => FormState {
                draft: state.draft.with_field(field, value),
                modified: true,
                ..state
            },
            FormIntent::FocusNext => FormState {
                focused: (state.focused + 1) % FormField::ALL.len(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: state
                    .focused
                    .checked_sub(1)
                    .unwrap_or(FormField::ALL.len() - 1),
                ..state
            },
            FormIntent::RequestClose => {
                if state.modified && !state.confirm_discard {
                    FormState {
                        confirm_discard: true,
                        ..state
                    }
                } else {
                    state
                }
            }
            FormIntent::CancelClose => FormState {
                confirm_discard: false,
                ..state
            },
        }
    }
}
