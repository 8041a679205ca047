//! The in-memory draft of a vehicle record being edited.
//!
//! The draft mirrors the form's input widgets: free-text fields stay
//! strings until submission, the year comes from a picker-style widget,
//! and the imported flag is a checkbox. Edits are copy-on-write so a
//! previously observed draft is never mutated behind the renderer's back.

use crate::domain::vehicle::{parse_iso_date, TransportVehicle, Vehicle};

/// Identity of a form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Brand,
    Model,
    Color,
    YearManufacture,
    Imported,
    Plates,
    SellingPrice,
    SellingDate,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Brand,
        FormField::Model,
        FormField::Color,
        FormField::YearManufacture,
        FormField::Imported,
        FormField::Plates,
        FormField::SellingPrice,
        FormField::SellingDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Brand => "Brand",
            FormField::Model => "Model",
            FormField::Color => "Color",
            FormField::YearManufacture => "Year of manufacture",
            FormField::Imported => "Imported",
            FormField::Plates => "Plates",
            FormField::SellingPrice => "Selling price",
            FormField::SellingDate => "Selling date",
        }
    }

    /// Required fields must be non-blank before submission is attempted.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Brand | FormField::Model | FormField::Color | FormField::Plates
        )
    }
}

/// The value carried by a field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Year(Option<i32>),
    Flag(bool),
}

/// The not-yet-persisted copy of a record, seeded from defaults or from a
/// loaded record and replaced wholesale on load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year_manufacture: Option<i32>,
    pub imported: bool,
    pub plates: String,
    pub selling_price: String,
    pub selling_date: String,
}

impl VehicleDraft {
    /// Seed the draft wholesale from a loaded record.
    pub fn from_record(record: &Vehicle) -> Self {
        Self {
            brand: record.brand.clone(),
            model: record.model.clone(),
            color: record.color.clone(),
            year_manufacture: record.year_manufacture,
            imported: record.imported,
            plates: record.plates.clone(),
            selling_price: record
                .selling_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
            selling_date: record
                .selling_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Current value of one field.
    pub fn field(&self, field: FormField) -> FieldValue {
        match field {
            FormField::Brand => FieldValue::Text(self.brand.clone()),
            FormField::Model => FieldValue::Text(self.model.clone()),
            FormField::Color => FieldValue::Text(self.color.clone()),
            FormField::YearManufacture => FieldValue::Year(self.year_manufacture),
            FormField::Imported => FieldValue::Flag(self.imported),
            FormField::Plates => FieldValue::Text(self.plates.clone()),
            FormField::SellingPrice => FieldValue::Text(self.selling_price.clone()),
            FormField::SellingDate => FieldValue::Text(self.selling_date.clone()),
        }
    }

    /// Copy-on-write edit: a new draft with one field overwritten.
    ///
    /// A value of the wrong kind for the field leaves the draft unchanged.
    pub fn with_field(&self, field: FormField, value: FieldValue) -> Self {
        let mut next = self.clone();
        match (field, value) {
            (FormField::Brand, FieldValue::Text(text)) => next.brand = text,
            (FormField::Model, FieldValue::Text(text)) => next.model = text,
            (FormField::Color, FieldValue::Text(text)) => next.color = text,
            (FormField::Plates, FieldValue::Text(text)) => next.plates = text,
            (FormField::SellingPrice, FieldValue::Text(text)) => next.selling_price = text,
            (FormField::SellingDate, FieldValue::Text(text)) => next.selling_date = text,
            (FormField::YearManufacture, FieldValue::Year(year)) => next.year_manufacture = year,
            (FormField::Imported, FieldValue::Flag(flag)) => next.imported = flag,
            _ => {}
        }
        next
    }

    /// First required field left blank, if any.
    pub fn first_missing_required(&self) -> Option<FormField> {
        FormField::ALL.iter().copied().find(|field| {
            field.is_required()
                && matches!(self.field(*field), FieldValue::Text(text) if text.trim().is_empty())
        })
    }

    /// Render the draft into the wire shape for create/update submission.
    pub fn to_transport(&self, id: Option<i64>) -> TransportVehicle {
        TransportVehicle {
            id,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            color: self.color.clone(),
            year_manufacture: self.year_manufacture.map(|year| format!("{year:04}-01-01")),
            imported: u8::from(self.imported),
            plates: self.plates.trim().to_string(),
            selling_price: self.selling_price.trim().parse::<f64>().ok(),
            selling_date: parse_iso_date(self.selling_date.trim())
                .map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }
}
