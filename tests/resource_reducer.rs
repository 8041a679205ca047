use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;

use carport::api::{ApiError, ResourceFetcher};
use carport::ui::events::AppEvent;
use carport::ui::mvi::Reducer;
use carport::ui::resource::{
    ResourceController, ResourceIntent, ResourceReducer, ResourceState,
};

#[derive(Debug, Clone, PartialEq)]
struct PlateMatch {
    plates: String,
    record_id: i64,
}

fn found(plates: &str, record_id: i64) -> PlateMatch {
    PlateMatch {
        plates: plates.to_string(),
        record_id,
    }
}

fn identifier_changed(identifier: &str, epoch: u64) -> ResourceIntent<PlateMatch> {
    ResourceIntent::IdentifierChanged {
        identifier: Some(identifier.to_string()),
        epoch,
    }
}

#[test]
fn falsy_identifier_yields_idle() {
    let state = ResourceReducer::reduce(
        ResourceState::Resolved {
            payload: found("ABC-1D23", 7),
        },
        ResourceIntent::IdentifierChanged {
            identifier: None,
            epoch: 2,
        },
    );
    assert_eq!(state, ResourceState::Idle);
}

#[test]
fn lookup_scenario_resolves_with_payload() {
    let state =
        ResourceReducer::reduce(ResourceState::default(), identifier_changed("ABC-1D23", 1));
    assert!(state.is_pending());

    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchResolved {
            epoch: 1,
            payload: found("ABC-1D23", 7),
        },
    );
    assert_eq!(state.payload(), Some(&found("ABC-1D23", 7)));
}

#[test]
fn superseded_outcome_is_discarded_when_it_arrives_late() {
    // First identifier's fetch is still in flight when the second starts.
    let state =
        ResourceReducer::reduce(ResourceState::default(), identifier_changed("OLD-0A00", 1));
    let state = ResourceReducer::reduce(state, identifier_changed("NEW-1B11", 2));

    // The stale outcome lands after the new trigger: it must not apply.
    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchResolved {
            epoch: 1,
            payload: found("OLD-0A00", 3),
        },
    );
    assert!(state.is_pending());

    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchResolved {
            epoch: 2,
            payload: found("NEW-1B11", 4),
        },
    );
    assert_eq!(state.payload().map(|m| m.plates.as_str()), Some("NEW-1B11"));
}

#[test]
fn superseded_outcome_is_discarded_when_it_arrives_first() {
    let state =
        ResourceReducer::reduce(ResourceState::default(), identifier_changed("OLD-0A00", 1));
    let state = ResourceReducer::reduce(state, identifier_changed("NEW-1B11", 2));

    // The newer fetch finishes before the stale one this time.
    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchResolved {
            epoch: 2,
            payload: found("NEW-1B11", 4),
        },
    );
    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchRejected {
            epoch: 1,
            error: "timed out".to_string(),
        },
    );
    assert_eq!(state.payload().map(|m| m.plates.as_str()), Some("NEW-1B11"));
}

#[test]
fn rejection_keeps_no_payload() {
    let state =
        ResourceReducer::reduce(ResourceState::default(), identifier_changed("ZZZ-0Z00", 1));
    let state = ResourceReducer::reduce(
        state,
        ResourceIntent::FetchRejected {
            epoch: 1,
            error: "Not found".to_string(),
        },
    );
    assert_eq!(
        state,
        ResourceState::Rejected {
            error: "Not found".to_string()
        }
    );
    assert_eq!(state.payload(), None);
}

// --- Controller tests with a fake fetcher ---

use carport::domain::Vehicle;

fn sample_vehicle(brand: &str) -> Vehicle {
    Vehicle {
        id: 1,
        brand: brand.to_string(),
        model: "Uno".to_string(),
        color: "red".to_string(),
        year_manufacture: Some(1994),
        imported: false,
        plates: "ABC-1D23".to_string(),
        selling_price: None,
        selling_date: None,
    }
}

#[derive(Default)]
struct CountingFetcher {
    calls: AtomicUsize,
}

#[async_trait]
impl ResourceFetcher<Vehicle> for CountingFetcher {
    async fn fetch(&self, identifier: &str) -> Result<Vehicle, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(sample_vehicle(identifier))
    }
}

fn lookup_controller(
    fetcher: Arc<CountingFetcher>,
    events: mpsc::Sender<AppEvent>,
) -> ResourceController<Vehicle> {
    ResourceController::new(fetcher, events, Handle::current(), |epoch, result| {
        AppEvent::LookupFetched { epoch, result }
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn falsy_identifier_issues_no_request() {
    let fetcher = Arc::new(CountingFetcher::default());
    let (tx, rx) = mpsc::channel();
    let mut controller = lookup_controller(Arc::clone(&fetcher), tx);

    let intent = controller.set_identifier(Some("   "));
    assert!(matches!(
        intent,
        ResourceIntent::IdentifierChanged {
            identifier: None,
            ..
        }
    ));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn newer_identifier_wins_regardless_of_arrival_order() {
    let fetcher = Arc::new(CountingFetcher::default());
    let (tx, rx) = mpsc::channel();
    let mut controller = lookup_controller(Arc::clone(&fetcher), tx);

    let mut state = ResourceState::default();
    let intent = controller.set_identifier(Some("Ford"));
    state = ResourceReducer::reduce(state, intent);
    let intent = controller.set_identifier(Some("Fiat"));
    state = ResourceReducer::reduce(state, intent);

    for _ in 0..2 {
        let event = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("fetch outcome");
        let AppEvent::LookupFetched { epoch, result } = event else {
            panic!("unexpected event");
        };
        let intent = controller.outcome(epoch, result);
        state = ResourceReducer::reduce(state, intent);
    }

    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    assert_eq!(state.payload().map(|v| v.brand.as_str()), Some("Fiat"));
}
