//! Vehicle records and the form draft edited on top of them.

mod draft;
mod vehicle;

pub use draft::{FieldValue, FormField, VehicleDraft};
pub use vehicle::{
    current_year, next_color, parse_iso_date, RecordError, TransportVehicle, Vehicle,
    COLOR_CHOICES, MIN_YEAR,
};
