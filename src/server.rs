pub mod metrics;
pub mod routes;
pub mod state;

use crate::{
    config::Config,
    errors::{ApiError, AppError},
    subgraph::SubgraphClient,
};
use axum::{Extension, Router};
use self::metrics::setup_metrics_recorder;
use routes::get_api_routes;
use state::AppState;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds and configures the Axum `Router`.
/// Returns `Ok(Router)` on success or an `AppError` if a step fails.
pub fn build(config: Arc<Config>) -> Result<Router, AppError> {
    // The recorder has to exist before anything records metrics, or the
    // initial data will be lost
    let metrics_handle = (!config.no_metrics).then(setup_metrics_recorder);

    let subgraph = SubgraphClient::new(config.subgraph_url.clone(), config.subgraph_timeout)?;

    let app_state = AppState { subgraph };

    let inner = {
        let mut routes = get_api_routes(!config.no_metrics)
            .with_state(app_state)
            .fallback(|| async { ApiError::not_found() });

        if let Some(prom_handler) = metrics_handle {
            routes = routes.layer(Extension(prom_handler));
        }

        routes
    };

    let inner = NormalizePathLayer::trim_trailing_slash().layer(inner);

    Ok(Router::new().fallback_service(inner))
}
