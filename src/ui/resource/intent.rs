use crate::ui::mvi::Intent;

/// Intents driving the fetch-state machine.
///
/// Every intent carries the epoch of the trigger it belongs to; the
/// reducer uses it to discard outcomes of superseded fetches.
#[derive(Debug, Clone)]
pub enum ResourceIntent<T> {
    /// The externally supplied identifier changed. `None` means a falsy
    /// identifier: no fetch was issued.
    IdentifierChanged {
        identifier: Option<String>,
        epoch: u64,
    },
    /// The fetch stamped with `epoch` succeeded.
    FetchResolved { epoch: u64, payload: T },
    /// The fetch stamped with `epoch` failed.
    FetchRejected { epoch: u64, error: String },
}

impl<T: Send + 'static> Intent for ResourceIntent<T> {}
