//! HTTP access to the vehicle inventory service.
//!
//! The controllers never talk to `reqwest` directly: they consume the
//! [`ResourceFetcher`] and [`VehicleStore`] seams, which [`ApiClient`]
//! implements. Tests substitute fakes at the same seams.

mod client;
mod error;

pub use client::{ApiClient, PlateLookup, VehicleListing};
pub use error::ApiError;

use async_trait::async_trait;

use crate::domain::{TransportVehicle, Vehicle};

/// Fetch a single resource by its external identifier.
#[async_trait]
pub trait ResourceFetcher<T>: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<T, ApiError>;
}

/// Create/read/update operations on vehicle records.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn fetch_record(&self, id: i64) -> Result<Vehicle, ApiError>;
    async fn create(&self, record: TransportVehicle) -> Result<(), ApiError>;
    async fn update(&self, id: i64, record: TransportVehicle) -> Result<(), ApiError>;
}
