use crate::{
    api::ApiResult, blocks::BlockResponse, errors::ApiError, json::PrettyJson,
    server::state::AppState,
};
use axum::extract::{Path, State, rejection::PathRejection};
use tracing::warn;

/// `GET /block/{blocknumber}`
pub async fn route(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<BlockResponse> {
    let Path(block_number) = path.map_err(|e| {
        warn!(error = %e, "Unusable block number in path");
        ApiError::block_not_found()
    })?;

    let transactions = state
        .subgraph
        .block_transactions(&block_number)
        .await
        .map_err(|e| {
            warn!(block_number = %block_number, error = %e, "Block lookup failed");
            ApiError::block_not_found()
        })?;

    Ok(PrettyJson(BlockResponse::new(block_number, &transactions)))
}
