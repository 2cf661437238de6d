use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Like `axum::Json`, but renders the body indented.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                error!("Failed to serialize response body: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
                    err.to_string(),
                )
                    .into_response()
            },
        }
    }
}
