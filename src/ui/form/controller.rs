use std::sync::mpsc::Sender;
use std::sync::Arc;

use scopeguard::defer;
use tokio::runtime::Handle;

use crate::api::VehicleStore;
use crate::domain::VehicleDraft;
use crate::ui::events::AppEvent;
use crate::ui::feedback::Feedback;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormMode;

/// Side-effect half of the record form.
///
/// Loads the record for an edit session and submits the draft. All HTTP
/// work runs on the runtime; outcomes come back through the event
/// channel stamped with the form session's epoch. Operations are
/// bracketed with the feedback surface's wait indicator.
pub struct FormController {
    epoch: u64,
    store: Arc<dyn VehicleStore>,
    feedback: Arc<dyn Feedback>,
    events: Sender<AppEvent>,
    runtime: Handle,
}

impl FormController {
    pub fn new(
        store: Arc<dyn VehicleStore>,
        feedback: Arc<dyn Feedback>,
        events: Sender<AppEvent>,
        runtime: Handle,
    ) -> Self {
        Self {
            epoch: 0,
            store,
            feedback,
            events,
            runtime,
        }
    }

    /// Start a new form session; for an edit session this issues the
    /// record load. A failed load leaves the draft at its defaults.
    pub fn open(&mut self, mode: FormMode) -> FormIntent {
        self.epoch += 1;
        let epoch = self.epoch;

        if let FormMode::Edit { id } = mode {
            let store = Arc::clone(&self.store);
            let feedback = Arc::clone(&self.feedback);
            let events = self.events.clone();
            tracing::debug!(id, epoch, "loading record for edit");
            self.runtime.spawn(async move {
                feedback.begin_wait();
                defer! {
                    feedback.end_wait();
                }
                let result = store.fetch_record(id).await;
                let _ = events.send(AppEvent::RecordLoaded { epoch, result });
            });
        }

        FormIntent::Open { mode, epoch }
    }

    /// Submit the draft: update when the session carries an id, create
    /// otherwise. The draft itself is left untouched either way, so the
    /// user can retry after a failure.
    pub fn submit(&self, mode: FormMode, draft: &VehicleDraft) {
        let epoch = self.epoch;
        let payload = draft.to_transport(match mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        });

        let store = Arc::clone(&self.store);
        let feedback = Arc::clone(&self.feedback);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            feedback.begin_wait();
            defer! {
                feedback.end_wait();
            }
            let result = match mode {
                FormMode::Edit { id } => store.update(id, payload).await,
                FormMode::Create => store.create(payload).await,
            };
            let _ = events.send(AppEvent::SubmitFinished { epoch, result });
        });
    }
}
