//! The reqwest-backed client for the vehicle inventory service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{ResourceFetcher, VehicleStore};
use crate::config::ApiConfig;
use crate::domain::{TransportVehicle, Vehicle};

pub struct ApiClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a request under the configured timeout and map non-success
    /// statuses to an error carrying the service's own message.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4();
        let builder = builder.header("x-request-id", request_id.to_string());

        let response = match timeout(self.request_timeout, builder.send()).await {
            Err(_) => {
                return Err(ApiError::Timeout {
                    duration: self.request_timeout.as_secs(),
                })
            }
            Ok(Err(source)) => return Err(ApiError::Connection { source }),
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        tracing::debug!(%request_id, status = status.as_u16(), "vehicle api response");
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => error_message(status, &body),
            Err(_) => status_fallback(status),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_one(&self, builder: RequestBuilder) -> Result<Vehicle, ApiError> {
        let record: TransportVehicle = self
            .execute(builder)
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })?;
        Ok(Vehicle::from_transport(record)?)
    }

    /// Fetch the vehicle carrying the given plate number.
    pub async fn lookup_by_plate(&self, plates: &str) -> Result<Vehicle, ApiError> {
        self.fetch_one(self.http.get(self.url(&format!("/vehicles/by-plate/{plates}"))))
            .await
    }

    /// Fetch a vehicle record by id.
    pub async fn fetch_record(&self, id: i64) -> Result<Vehicle, ApiError> {
        self.fetch_one(self.http.get(self.url(&format!("/vehicles/{id}"))))
            .await
    }

    /// Fetch the whole vehicle collection.
    pub async fn list(&self) -> Result<Vec<Vehicle>, ApiError> {
        let records: Vec<TransportVehicle> = self
            .execute(self.http.get(self.url("/vehicles")))
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })?;
        records
            .into_iter()
            .map(|record| Vehicle::from_transport(record).map_err(ApiError::from))
            .collect()
    }

    /// Create a new vehicle record.
    pub async fn create(&self, record: TransportVehicle) -> Result<(), ApiError> {
        self.execute(self.http.post(self.url("/vehicles")).json(&record))
            .await
            .map(|_| ())
    }

    /// Replace an existing vehicle record.
    pub async fn update(&self, id: i64, record: TransportVehicle) -> Result<(), ApiError> {
        self.execute(self.http.put(self.url(&format!("/vehicles/{id}"))).json(&record))
            .await
            .map(|_| ())
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|message| message.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| status_fallback(status))
}

fn status_fallback(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[async_trait]
impl VehicleStore for ApiClient {
    async fn fetch_record(&self, id: i64) -> Result<Vehicle, ApiError> {
        ApiClient::fetch_record(self, id).await
    }

    async fn create(&self, record: TransportVehicle) -> Result<(), ApiError> {
        ApiClient::create(self, record).await
    }

    async fn update(&self, id: i64, record: TransportVehicle) -> Result<(), ApiError> {
        ApiClient::update(self, id, record).await
    }
}

/// Lookup adapter: the identifier is a plate number.
pub struct PlateLookup(pub Arc<ApiClient>);

#[async_trait]
impl ResourceFetcher<Vehicle> for PlateLookup {
    async fn fetch(&self, identifier: &str) -> Result<Vehicle, ApiError> {
        self.0.lookup_by_plate(identifier).await
    }
}

/// Listing adapter: the identifier names the collection and is otherwise
/// unused; every fetch returns the full set.
pub struct VehicleListing(pub Arc<ApiClient>);

#[async_trait]
impl ResourceFetcher<Vec<Vehicle>> for VehicleListing {
    async fn fetch(&self, _identifier: &str) -> Result<Vec<Vehicle>, ApiError> {
        self.0.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_body_over_status() {
        let message = error_message(StatusCode::NOT_FOUND, r#"{"error": "Not found"}"#);
        assert_eq!(message, "Not found");
    }

    #[test]
    fn error_message_falls_back_to_canonical_reason() {
        let message = error_message(StatusCode::NOT_FOUND, "plain text");
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        });
        assert_eq!(client.url("/vehicles"), "http://localhost:8080/vehicles");
    }
}
