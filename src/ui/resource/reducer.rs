use std::marker::PhantomData;

use crate::ui::mvi::Reducer;
use crate::ui::resource::intent::ResourceIntent;
use crate::ui::resource::state::ResourceState;

/// Pure transition function for the fetch-state machine.
///
/// Last-identifier-wins: an outcome applies only while its epoch matches
/// the pending request. Anything else arrives from a superseded fetch and
/// leaves the state untouched.
pub struct ResourceReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for ResourceReducer<T> {
    type State = ResourceState<T>;
    type Intent = ResourceIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::IdentifierChanged {
                identifier: None, ..
            } => ResourceState::Idle,
            ResourceIntent::IdentifierChanged {
                identifier: Some(identifier),
                epoch,
            } => ResourceState::Pending { identifier, epoch },
            ResourceIntent::FetchResolved { epoch, payload } => match state {
                ResourceState::Pending { epoch: current, .. } if current == epoch => {
                    ResourceState::Resolved { payload }
                }
                other => other,
            },
            ResourceIntent::FetchRejected { epoch, error } => match state {
                ResourceState::Pending { epoch: current, .. } if current == epoch => {
                    ResourceState::Rejected { error }
                }
                other => other,
            },
        }
    }
}
