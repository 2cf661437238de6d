use crate::{cli::Args, errors::AppError};
use clap::ValueEnum;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{net::IpAddr, time::Duration};
use tracing::Level;

pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/ianlapham/uniswap-v3-alt";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: IpAddr,
    pub server_port: u16,
    pub log_level: Level,
    pub subgraph_url: Url,
    pub subgraph_timeout: Duration,
    pub no_metrics: bool,
}

#[derive(Debug, Clone, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let subgraph_url = Url::parse(&args.subgraph_url).map_err(|e| {
            AppError::Server(format!("Invalid --subgraph-url '{}': {e}", args.subgraph_url))
        })?;

        if !matches!(subgraph_url.scheme(), "http" | "https") {
            return Err(AppError::Server(format!(
                "--subgraph-url must be an http(s) URL, got '{subgraph_url}'"
            )));
        }

        if args.subgraph_timeout_sec == 0 {
            return Err(AppError::Server(
                "--subgraph-timeout-sec must be greater than 0".into(),
            ));
        }

        Ok(Config {
            server_address: args.server_address,
            server_port: args.server_port,
            log_level: args.log_level.into(),
            subgraph_url,
            subgraph_timeout: Duration::from_secs(args.subgraph_timeout_sec),
            no_metrics: args.no_metrics,
        })
    }
}
