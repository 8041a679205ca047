//! Mock vehicle-inventory server for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl MockResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }),
        }
    }
}

#[derive(Default)]
struct MockState {
    captured: Vec<CapturedRequest>,
    responses: VecDeque<MockResponse>,
}

type SharedState = Arc<Mutex<MockState>>;

/// In-process HTTP server answering with canned responses and recording
/// every request it sees.
#[derive(Clone)]
pub struct MockApiServer {
    addr: SocketAddr,
    state: SharedState,
}

impl MockApiServer {
    pub async fn start() -> Self {
        let state: SharedState = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queue the response for the next request. Requests beyond the queue
    /// get a generic `{"ok": true}`.
    pub async fn enqueue(&self, response: MockResponse) {
        self.state.lock().await.responses.push_back(response);
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.captured.clone()
    }
}

async fn handle(State(state): State<SharedState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body_json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    let mut state = state.lock().await;
    state.captured.push(CapturedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        body: body_json,
    });

    let response = state.responses.pop_front().unwrap_or(MockResponse {
        status: 200,
        body: serde_json::json!({ "ok": true }),
    });
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}
