//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pin_api::client::ApiClient;
use pin_api::request::RequestDescriptor;
use pin_api::response::{ApiResponse, Classification};
use pin_api::transport::Transport;
use pin_core::error::{Error, Result};

/// Transport double: records every descriptor it receives and serves
/// queued envelopes in order.
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue an envelope to serve on the next call.
    pub fn push(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Every descriptor received so far, in call order.
    pub fn calls(&self) -> Vec<RequestDescriptor> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(descriptor.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Http("mock transport exhausted".into()))
    }
}

/// Build a client over the given mock transport with the v1 prefix.
pub fn client_with(transport: Arc<MockTransport>) -> ApiClient {
    ApiClient::with_transport(transport, "v1")
}

/// A 200 envelope with the given body.
pub fn ok(body: &str) -> ApiResponse {
    ApiResponse::new(200, body, Classification::Ok)
}

/// A 429 envelope carrying a Retry-After hint.
pub fn rate_limited(retry_after: Option<u64>) -> ApiResponse {
    let mut envelope = ApiResponse::new(
        429,
        r#"{"message":"rate limit exceeded"}"#,
        Classification::RateLimited,
    );
    envelope.retry_after = retry_after;
    envelope
}

/// An error-classified envelope with the given status.
pub fn error(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(status, body, Classification::Error)
}

/// A single-object body: `{"data": <record>}`.
pub fn single_body(record: serde_json::Value) -> String {
    serde_json::json!({ "data": record }).to_string()
}

/// A list body: `{"data": [...], "page": {"next": ...}}`.
pub fn list_body(records: Vec<serde_json::Value>, next: Option<&str>) -> String {
    match next {
        Some(next) => {
            serde_json::json!({ "data": records, "page": { "next": next } }).to_string()
        }
        None => serde_json::json!({ "data": records }).to_string(),
    }
}
