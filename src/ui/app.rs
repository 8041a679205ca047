use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::{ApiClient, PlateLookup, VehicleListing};
use crate::domain::{FieldValue, Vehicle};
use crate::ui::events::AppEvent;
use crate::ui::feedback::{Feedback, NoticeKind, StatusFeedback};
use crate::ui::form::{FormController, FormIntent, FormMode, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::resource::{ResourceController, ResourceReducer, ResourceState};

/// Identifier under which the listing controller fetches the collection.
const LISTING_IDENTIFIER: &str = "vehicles";

/// The screen currently shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Lookup,
    Listing,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Lookup screen: the plate being typed and its fetch state (MVI).
    plate_input: String,
    lookup: ResourceState<Vehicle>,
    lookup_controller: ResourceController<Vehicle>,
    /// Listing screen (MVI).
    listing: ResourceState<Vec<Vehicle>>,
    listing_controller: ResourceController<Vec<Vehicle>>,
    listing_selection: usize,
    /// Form screen (MVI).
    form: FormState,
    form_controller: FormController,
    feedback: StatusFeedback,
}

impl App {
    pub fn new(api: Arc<ApiClient>, events: Sender<AppEvent>, runtime: Handle) -> Self {
        let feedback = StatusFeedback::new();
        let lookup_controller = ResourceController::new(
            Arc::new(PlateLookup(Arc::clone(&api))),
            events.clone(),
            runtime.clone(),
            |epoch, result| AppEvent::LookupFetched { epoch, result },
        );
        let listing_controller = ResourceController::new(
            Arc::new(VehicleListing(Arc::clone(&api))),
            events.clone(),
            runtime.clone(),
            |epoch, result| AppEvent::ListingFetched { epoch, result },
        );
        let form_controller = FormController::new(
            api,
            Arc::new(feedback.clone()),
            events,
            runtime,
        );

        let mut app = Self {
            should_quit: false,
            route: Route::Listing,
            plate_input: String::new(),
            lookup: ResourceState::default(),
            lookup_controller,
            listing: ResourceState::default(),
            listing_controller,
            listing_selection: 0,
            form: FormState::default(),
            form_controller,
            feedback,
        };
        app.navigate(Route::Listing);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn feedback(&self) -> &StatusFeedback {
        &self.feedback
    }

    /// Switch screens. Entering the listing always re-fetches the
    /// collection; there is no cache to go stale.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        if route == Route::Listing {
            self.listing_selection = 0;
            let intent = self
                .listing_controller
                .set_identifier(Some(LISTING_IDENTIFIER));
            dispatch_mvi!(self, listing, ResourceReducer<Vec<Vehicle>>, intent);
        }
    }

    /// Handle everything except key input (which goes through
    /// [`crate::ui::input::handle_key`]).
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(_) => {}
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::LookupFetched { epoch, result } => {
                let intent = self.lookup_controller.outcome(epoch, result);
                dispatch_mvi!(self, lookup, ResourceReducer<Vehicle>, intent);
            }
            AppEvent::ListingFetched { epoch, result } => {
                let intent = self.listing_controller.outcome(epoch, result);
                dispatch_mvi!(self, listing, ResourceReducer<Vec<Vehicle>>, intent);
            }
            AppEvent::RecordLoaded { epoch, result } => match result {
                Ok(record) => {
                    dispatch_mvi!(self, form, FormReducer, FormIntent::RecordLoaded {
                        epoch,
                        record,
                    });
                }
                // Draft stays at its defaults; only the message surfaces.
                Err(error) => self
                    .feedback
                    .notify(&format!("ERROR: {error}"), NoticeKind::Error),
            },
            AppEvent::SubmitFinished { epoch, result } => match result {
                Ok(()) => {
                    self.feedback.notify("Record saved.", NoticeKind::Success);
                    if self.route == Route::Form && self.form.epoch == epoch {
                        self.navigate(Route::Listing);
                    }
                }
                Err(error) => self
                    .feedback
                    .notify(&format!("ERROR: {error}"), NoticeKind::Error),
            },
        }
    }

    fn on_tick(&mut self) {
        self.feedback.expire();
    }

    // --- Lookup screen ---

    pub fn plate_input(&self) -> &str {
        &self.plate_input
    }

    pub fn lookup_state(&self) -> &ResourceState<Vehicle> {
        &self.lookup
    }

    pub fn push_plate_char(&mut self, ch: char) {
        self.plate_input.push(ch.to_ascii_uppercase());
    }

    pub fn backspace_plate(&mut self) {
        self.plate_input.pop();
    }

    /// Fetch whatever is currently typed. An empty input parks the
    /// screen back in the idle state without a request.
    pub fn submit_lookup(&mut self) {
        let plate = self.plate_input.clone();
        let intent = self.lookup_controller.set_identifier(Some(&plate));
        dispatch_mvi!(self, lookup, ResourceReducer<Vehicle>, intent);
    }

    // --- Listing screen ---

    pub fn listing_state(&self) -> &ResourceState<Vec<Vehicle>> {
        &self.listing
    }

    pub fn listing_selection(&self) -> usize {
        self.listing_selection
    }

    pub fn move_listing_selection(&mut self, delta: i64) {
        let Some(vehicles) = self.listing.payload() else {
            return;
        };
        if vehicles.is_empty() {
            return;
        }
        let len = vehicles.len() as i64;
        let next = (self.listing_selection as i64 + delta).rem_euclid(len);
        self.listing_selection = next as usize;
    }

    pub fn refresh_listing(&mut self) {
        self.navigate(Route::Listing);
    }

    /// Open the edit form for the selected row.
    pub fn open_selected_vehicle(&mut self) {
        let Some(id) = self
            .listing
            .payload()
            .and_then(|vehicles| vehicles.get(self.listing_selection))
            .map(|vehicle| vehicle.id)
        else {
            return;
        };
        self.open_form(FormMode::Edit { id });
    }

    // --- Form screen ---

    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    pub fn open_form(&mut self, mode: FormMode) {
        let intent = self.form_controller.open(mode);
        dispatch_mvi!(self, form, FormReducer, intent);
        self.route = Route::Form;
    }

    /// Overwrite the focused field with a new value.
    pub fn edit_focused(&mut self, value: FieldValue) {
        let field = self.form.focused_field();
        dispatch_mvi!(self, form, FormReducer, FormIntent::EditField {
            field,
            value,
        });
    }

    pub fn focus_next_field(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusNext);
    }

    pub fn focus_prev_field(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusPrev);
    }

    /// Submit the draft unless a required field is still blank.
    pub fn submit_form(&mut self) {
        if let Some(field) = self.form.draft.first_missing_required() {
            self.feedback.notify(
                &format!("Required field missing: {}", field.label()),
                NoticeKind::Error,
            );
            return;
        }
        self.form_controller.submit(self.form.mode, &self.form.draft);
    }

    /// Leave the form; a modified draft raises the confirmation modal
    /// instead of navigating.
    pub fn close_form(&mut self) {
        if self.form.modified && !self.form.confirm_discard {
            dispatch_mvi!(self, form, FormReducer, FormIntent::RequestClose);
        } else {
            self.navigate(Route::Listing);
        }
    }

    pub fn cancel_close(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::CancelClose);
    }

    /// User confirmed losing the draft.
    pub fn accept_discard(&mut self) {
        self.navigate(Route::Listing);
    }
}
