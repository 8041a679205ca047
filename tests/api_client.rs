mod common;

use carport::api::{ApiClient, ApiError};
use carport::config::ApiConfig;
use carport::domain::VehicleDraft;
use common::mock_api::{MockApiServer, MockResponse};

fn client_for(server: &MockApiServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
}

fn vehicle_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "brand": "Ford",
        "model": "Ka",
        "color": "red",
        "year_manufacture": "1994-01-01T00:00:00.000Z",
        "imported": 1,
        "plates": "ABC-1D23",
        "selling_price": 12500.0,
        "selling_date": "2024-06-30"
    })
}

fn filled_draft() -> VehicleDraft {
    VehicleDraft {
        brand: "Fiat".to_string(),
        model: "Uno".to_string(),
        color: "red".to_string(),
        year_manufacture: Some(1994),
        imported: false,
        plates: "XYZ-9A87".to_string(),
        selling_price: "9900".to_string(),
        selling_date: String::new(),
    }
}

#[tokio::test]
async fn lookup_converts_the_transport_record() {
    let server = MockApiServer::start().await;
    server.enqueue(MockResponse::json(vehicle_json(7))).await;
    let client = client_for(&server);

    let vehicle = client.lookup_by_plate("ABC-1D23").await.unwrap();
    assert_eq!(vehicle.id, 7);
    assert_eq!(vehicle.year_manufacture, Some(1994));
    assert!(vehicle.imported);

    let captured = server.captured().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "GET");
    assert_eq!(captured[0].path, "/vehicles/by-plate/ABC-1D23");
}

#[tokio::test]
async fn list_decodes_the_collection() {
    let server = MockApiServer::start().await;
    server
        .enqueue(MockResponse::json(serde_json::json!([
            vehicle_json(1),
            vehicle_json(2)
        ])))
        .await;
    let client = client_for(&server);

    let vehicles = client.list().await.unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[1].id, 2);

    let captured = server.captured().await;
    assert_eq!(captured[0].path, "/vehicles");
}

#[tokio::test]
async fn create_posts_exactly_once() {
    let server = MockApiServer::start().await;
    let client = client_for(&server);

    client.create(filled_draft().to_transport(None)).await.unwrap();

    let captured = server.captured().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "POST");
    assert_eq!(captured[0].path, "/vehicles");
    assert_eq!(captured[0].body["plates"], "XYZ-9A87");
    assert!(captured[0].body.get("id").is_none());
}

#[tokio::test]
async fn update_puts_to_the_record_id() {
    let server = MockApiServer::start().await;
    let client = client_for(&server);

    client
        .update(7, filled_draft().to_transport(Some(7)))
        .await
        .unwrap();

    let captured = server.captured().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "PUT");
    assert_eq!(captured[0].path, "/vehicles/7");
    assert_eq!(captured[0].body["id"], 7);
}

#[tokio::test]
async fn error_body_message_is_surfaced_verbatim() {
    let server = MockApiServer::start().await;
    server.enqueue(MockResponse::error(404, "Not found")).await;
    let client = client_for(&server);

    let error = client.fetch_record(7).await.unwrap_err();
    assert!(matches!(error, ApiError::Status { status: 404, .. }));
    assert_eq!(error.to_string(), "Not found");
}

#[tokio::test]
async fn malformed_record_is_rejected_wholesale() {
    let server = MockApiServer::start().await;
    let mut body = vehicle_json(7);
    body["selling_date"] = serde_json::json!("soon");
    server.enqueue(MockResponse::json(body)).await;
    let client = client_for(&server);

    let error = client.fetch_record(7).await.unwrap_err();
    assert!(matches!(error, ApiError::InvalidRecord { .. }));
}
