//! Helpers for router tests.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tallyboard_core::analysis::{AnalysisError, Analyst, TextGenerator};
use tallyboard_shared::AppConfig;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// In-memory generator that echoes a fixed answer and counts calls.
#[derive(Default)]
pub struct FakeGenerator {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("## Análise\nTudo certo.".to_string())
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

impl FakeGenerator {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Router without any analysis credential.
pub fn router_without_key() -> Router {
    create_router(AppState::with_analyst(AppConfig::default(), None))
}

/// Router whose analyst is the returned fake.
pub fn router_with_fake() -> (Router, Arc<FakeGenerator>) {
    let generator = Arc::new(FakeGenerator::default());
    let analyst = Analyst::new(generator.clone(), "test-key");
    let router = create_router(AppState::with_analyst(AppConfig::default(), Some(analyst)));
    (router, generator)
}

/// Sends a request and returns the status, headers and raw body.
pub async fn send(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, header::HeaderMap, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

/// Sends a request and parses the JSON body.
pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Parses a decimal serialized as a JSON string.
pub fn decimal(value: &serde_json::Value) -> rust_decimal::Decimal {
    value.as_str().unwrap().parse().unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Multipart upload with a single `file` field.
pub fn upload(uri: &str, filename: &str, contents: &[u8]) -> Request<Body> {
    let boundary = "tallyboard-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}
