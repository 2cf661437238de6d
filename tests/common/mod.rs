#![allow(dead_code)]

pub mod mock_subgraph;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    sync::{Arc, LazyLock},
    time::Duration,
};
use tower::ServiceExt;
use uniswap_gateway::{AppError, config::Config, server::build};

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt::init();
});

pub fn initialize_logging() {
    LazyLock::force(&INIT_LOGGING);
}

pub fn test_config(subgraph_url: &str, subgraph_timeout: Duration) -> Arc<Config> {
    let config = Config {
        server_address: "127.0.0.1".parse().unwrap(),
        server_port: 8000,
        log_level: tracing::Level::INFO,
        subgraph_url: subgraph_url.parse().unwrap(),
        subgraph_timeout,
        no_metrics: false,
    };

    Arc::new(config)
}

pub fn build_app(subgraph_url: &str) -> Result<Router, AppError> {
    build(test_config(subgraph_url, Duration::from_secs(5)))
}

pub fn build_app_with_timeout(
    subgraph_url: &str,
    subgraph_timeout: Duration,
) -> Result<Router, AppError> {
    build(test_config(subgraph_url, subgraph_timeout))
}

/// Sends a `GET` request and returns status and raw body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Request failed");

    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}
