//! The draft-form controller.
//!
//! Holds a local draft of a vehicle record, applies copy-on-write field
//! edits, tracks whether anything was modified, and submits the draft as
//! a create (no id) or an update (id present). Discarding a modified
//! draft requires explicit confirmation.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::FormController;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormMode, FormState};
