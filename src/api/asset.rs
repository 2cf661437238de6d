use crate::{
    api::ApiResult, assets::AssetResponse, errors::ApiError, json::PrettyJson,
    server::state::AppState,
};
use axum::extract::{Path, State, rejection::PathRejection};
use tracing::{info, warn};

/// `GET /asset/{id}`, where `id` is the token contract address.
pub async fn route(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<AssetResponse> {
    let Path(id) = path.map_err(|e| {
        warn!(error = %e, "Unusable contract address in path");
        ApiError::asset_not_found()
    })?;

    match state.subgraph.token(&id).await {
        Ok(Some(token)) => Ok(PrettyJson(token.into())),
        Ok(None) => {
            info!(id = %id, "Token is not indexed by the subgraph");
            Err(ApiError::asset_not_found())
        },
        Err(e) => {
            warn!(id = %id, error = %e, "Token lookup failed");
            Err(ApiError::asset_not_found())
        },
    }
}
