pub mod asset;
pub mod block;
pub mod metrics;
pub mod root;

use crate::{errors::ApiError, json::PrettyJson};

pub type ApiResult<T> = Result<PrettyJson<T>, ApiError>;
