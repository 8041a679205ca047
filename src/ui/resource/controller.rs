use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::{ApiError, ResourceFetcher};
use crate::ui::events::AppEvent;
use crate::ui::resource::intent::ResourceIntent;

/// Side-effect half of the fetch-state machine.
///
/// Owns the epoch counter and task spawning; all state transitions go
/// through the reducer. Each identifier change bumps the epoch, so the
/// outcome of any still-running fetch for a previous identifier is
/// rejected by the reducer when it eventually lands.
pub struct ResourceController<T> {
    epoch: u64,
    fetcher: Arc<dyn ResourceFetcher<T>>,
    events: Sender<AppEvent>,
    wrap: fn(u64, Result<T, ApiError>) -> AppEvent,
    runtime: Handle,
}

impl<T: Send + 'static> ResourceController<T> {
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher<T>>,
        events: Sender<AppEvent>,
        runtime: Handle,
        wrap: fn(u64, Result<T, ApiError>) -> AppEvent,
    ) -> Self {
        Self {
            epoch: 0,
            fetcher,
            events,
            wrap,
            runtime,
        }
    }

    /// React to an identifier change.
    ///
    /// A falsy identifier (absent or blank) issues no request. Otherwise
    /// exactly one fetch is spawned, stamped with the new epoch.
    pub fn set_identifier(&mut self, identifier: Option<&str>) -> ResourceIntent<T> {
        self.epoch += 1;
        let epoch = self.epoch;

        let identifier = identifier
            .map(str::trim)
            .filter(|trimmed| !trimmed.is_empty())
            .map(str::to_string);

        let Some(identifier) = identifier else {
            return ResourceIntent::IdentifierChanged {
                identifier: None,
                epoch,
            };
        };

        let fetcher = Arc::clone(&self.fetcher);
        let events = self.events.clone();
        let wrap = self.wrap;
        let target = identifier.clone();
        tracing::debug!(identifier = %target, epoch, "issuing fetch");
        self.runtime.spawn(async move {
            let result = fetcher.fetch(&target).await;
            let _ = events.send(wrap(epoch, result));
        });

        ResourceIntent::IdentifierChanged {
            identifier: Some(identifier),
            epoch,
        }
    }

    /// Translate a completed fetch into the matching intent.
    pub fn outcome(&self, epoch: u64, result: Result<T, ApiError>) -> ResourceIntent<T> {
        match result {
            Ok(payload) => ResourceIntent::FetchResolved { epoch, payload },
            Err(error) => ResourceIntent::FetchRejected {
                epoch,
                error: error.to_string(),
            },
        }
    }
}
