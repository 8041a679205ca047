//! The vehicle record and its transport representation.
//!
//! The REST service speaks JSON with ISO 8601 date strings and a 0/1
//! `imported` flag. `TransportVehicle` mirrors that wire shape; `Vehicle`
//! is the typed record the rest of the application works with. Conversion
//! is explicit and fallible so a malformed record is rejected wholesale
//! instead of half-applied.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color choices offered by the form's select widget.
pub const COLOR_CHOICES: &[&str] = &[
    "beige", "black", "blue", "green", "lilac", "olive", "purple", "red", "silver", "white",
    "yellow",
];

/// Oldest accepted manufacture year.
pub const MIN_YEAR: i32 = 1951;

/// The current year, upper bound for the manufacture-year field.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Step through [`COLOR_CHOICES`] from `current`, wrapping at both ends.
///
/// An unknown or empty `current` lands on the first choice.
pub fn next_color(current: &str, step: i32) -> &'static str {
    let len = COLOR_CHOICES.len() as i32;
    let index = COLOR_CHOICES
        .iter()
        .position(|choice| *choice == current)
        .map(|index| (index as i32 + step).rem_euclid(len))
        .unwrap_or(0);
    COLOR_CHOICES[index as usize]
}

/// Errors raised while converting a transport record into a [`Vehicle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record has no id")]
    MissingId,

    #[error("invalid date in field '{field}': {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// A vehicle record as the application sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub color: String,
    /// Manufacture year, extracted from the transport date.
    pub year_manufacture: Option<i32>,
    pub imported: bool,
    pub plates: String,
    pub selling_price: Option<f64>,
    pub selling_date: Option<NaiveDate>,
}

/// A vehicle record as the REST service speaks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportVehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub brand: String,
    pub model: String,
    pub color: String,
    /// ISO 8601 date or datetime string; only the year is meaningful.
    #[serde(default)]
    pub year_manufacture: Option<String>,
    /// 0 or 1 on the wire.
    #[serde(default)]
    pub imported: u8,
    pub plates: String,
    #[serde(default)]
    pub selling_price: Option<f64>,
    /// ISO 8601 date or datetime string.
    #[serde(default)]
    pub selling_date: Option<String>,
}

/// Parse the date portion of an ISO 8601 date or datetime string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}

impl Vehicle {
    /// Convert a transport record into a typed [`Vehicle`].
    ///
    /// Date-shaped fields are transformed from their wire format here, so
    /// the caller either gets a fully converted record or an error.
    pub fn from_transport(record: TransportVehicle) -> Result<Self, RecordError> {
        let year_manufacture = match record.year_manufacture.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                parse_iso_date(raw)
                    .ok_or_else(|| RecordError::InvalidDate {
                        field: "year_manufacture",
                        value: raw.to_string(),
                    })?
                    .year(),
            ),
        };

        let selling_date = match record.selling_date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_iso_date(raw).ok_or_else(|| RecordError::InvalidDate {
                field: "selling_date",
                value: raw.to_string(),
            })?),
        };

        Ok(Self {
            id: record.id.ok_or(RecordError::MissingId)?,
            brand: record.brand,
            model: record.model,
            color: record.color,
            year_manufacture,
            imported: record.imported != 0,
            plates: record.plates,
            selling_price: record.selling_price,
            selling_date,
        })
    }
}
