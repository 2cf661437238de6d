use crate::{json::PrettyJson, server::state::AppState};
use axum::{extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub revision: String,
    pub subgraph_url: String,
}

pub async fn route(State(state): State<AppState>) -> impl IntoResponse {
    PrettyJson(RootResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        revision: env!("GIT_REVISION").to_string(),
        subgraph_url: state.subgraph.url().to_string(),
    })
}
