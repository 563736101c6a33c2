//! Test helpers shared by the greet-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use greet_service::config::GreetConfig;
use greet_service::{build_router, AppState, Application};
use http_body_util::BodyExt;
use service_core::config::Config as CoreConfig;
use tower::util::ServiceExt;

pub const DEV_ORIGIN: &str = "http://localhost:1420";

/// Dev defaults bound to a random loopback port.
pub fn test_config() -> GreetConfig {
    GreetConfig {
        common: CoreConfig { port: 0 },
        host: "127.0.0.1".to_string(),
        ..GreetConfig::default()
    }
}

pub fn test_router() -> Router {
    build_router(AppState::new(test_config())).expect("Failed to build router")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

/// Drive one request through the router without a socket.
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("Router call failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn get_from_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Origin", origin)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Spawn the application on a random port and return its base URL.
pub async fn spawn_app() -> String {
    let app = Application::build(test_config())
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    format!("http://127.0.0.1:{}", port)
}
