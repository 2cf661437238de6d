use axum::{
    Extension,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::sync::RwLock;

pub async fn route(
    Extension(prometheus_handle): Extension<Arc<RwLock<PrometheusHandle>>>,
) -> Response {
    let handle = prometheus_handle.read().await;

    handle.render().into_response()
}
