use crate::ui::mvi::UiState;

/// View state of an asynchronous fetch, generic over the payload.
///
/// Payload and error are mutually exclusive by construction: each lives
/// only in its own variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// No identifier selected; nothing to fetch.
    Idle,
    /// A fetch for `identifier` is in flight.
    Pending { identifier: String, epoch: u64 },
    /// The last fetch succeeded.
    Resolved { payload: T },
    /// The last fetch failed. Terminal until the identifier changes.
    Rejected { error: String },
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for ResourceState<T> {}

impl<T> ResourceState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Resolved { payload } => Some(payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(ResourceState::<u8>::default(), ResourceState::Idle);
    }

    #[test]
    fn payload_only_in_resolved() {
        let state = ResourceState::Resolved { payload: 5u8 };
        assert_eq!(state.payload(), Some(&5));
        let state = ResourceState::<u8>::Rejected {
            error: "boom".to_string(),
        };
        assert_eq!(state.payload(), None);
        assert!(!state.is_pending());
    }
}
