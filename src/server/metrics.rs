use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;

// to prevent multiple initialization of the metrics recorder, happens in tests
static HANDLER: OnceLock<Arc<RwLock<PrometheusHandle>>> = OnceLock::new();

pub fn setup_metrics_recorder() -> Arc<RwLock<PrometheusHandle>> {
    HANDLER.get_or_init(internal_setup).clone()
}

fn internal_setup() -> Arc<RwLock<PrometheusHandle>> {
    let builder = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Note: we’re initializing the counters with 0, otherwise they’re not present
    // under `GET /metrics` right after startup, before anything happens.

    describe_counter!(
        "http_requests_total",
        "HTTP calls made to the uniswap-gateway API"
    );

    describe_counter!(
        "subgraph_queries_total",
        "GraphQL queries sent to the subgraph, by query and outcome"
    );
    for query in ["asset", "block"] {
        for outcome in ["success", "failure", "timeout"] {
            counter!("subgraph_queries_total", "query" => query, "outcome" => outcome)
                .absolute(0);
        }
    }

    Arc::new(RwLock::new(builder))
}
