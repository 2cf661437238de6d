use crate::json::PrettyJson;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::{fmt, io};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Server startup error: {0}")]
    Server(String),

    #[error("Subgraph client error: {0}")]
    Subgraph(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        error!("I/O Error occurred: {}", err);
        AppError::Server(err.to_string())
    }
}

/// Error returned by every HTTP endpoint.
///
/// Only `message` goes over the wire, the status code travels as the HTTP
/// status of the response.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    #[serde(skip)]
    pub status_code: u16,
}

impl ApiError {
    fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Returned by `GET /asset/{id}` whenever the token lookup fails
    pub fn asset_not_found() -> Self {
        Self::new(404, "Contract address not found")
    }

    /// Returned by `GET /block/{blocknumber}` whenever the block lookup fails
    pub fn block_not_found() -> Self {
        Self::new(404, "Block number not found")
    }

    /// Router fallback
    pub fn not_found() -> Self {
        Self::new(404, "The requested component has not been found.")
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError ({}): {}", self.status_code, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), PrettyJson(self)).into_response()
    }
}
