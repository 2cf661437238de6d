pub mod api;
pub mod assets;
pub mod blocks;
pub mod cli;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod json;
pub mod logging;
pub mod middlewares;
pub mod server;
pub mod subgraph;

pub use errors::{ApiError, AppError};
