use crate::{
    config::{Config, DEFAULT_SUBGRAPH_URL, LogLevel},
    errors::AppError,
};
use anyhow::{Error, Result};
use clap::{CommandFactory, Parser};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use twelf::{Layer, config};

const ENV_PREFIX: &str = "UNISWAP_GATEWAY_";

static SHOULD_SKIP_SERIALIZNG_FIELDS: AtomicBool = AtomicBool::new(false);

fn should_skip_serializng_fields<T>(_: &T) -> bool {
    SHOULD_SKIP_SERIALIZNG_FIELDS.load(Ordering::SeqCst)
}

#[derive(Parser, Debug, Serialize, Clone)]
#[command(author,
          version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_REVISION"), ")"),
          about,
          long_about = None)]
#[config]
pub struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    pub server_address: IpAddr,

    #[arg(long, default_value = "8000")]
    pub server_port: u16,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// GraphQL endpoint of the Uniswap v3 subgraph
    #[arg(long, default_value = DEFAULT_SUBGRAPH_URL)]
    pub subgraph_url: String,

    /// Upper bound for a single subgraph request
    #[arg(long = "subgraph-timeout-sec", default_value = "30")]
    pub subgraph_timeout_sec: u64,

    #[arg(long)]
    pub no_metrics: bool,

    #[arg(long, help = "Write the current settings to the configuration file and exit")]
    #[serde(skip_serializing_if = "should_skip_serializng_fields")]
    #[serde(default)]
    init: bool,

    #[arg(long, help = "Path to an existing configuration file")]
    #[serde(skip_serializing_if = "should_skip_serializng_fields")]
    config: Option<PathBuf>,
}

fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("uniswap-gateway")
        .join("config.toml")
}

impl Args {
    /// Merges, from lowest to highest priority: the TOML file, `UNISWAP_GATEWAY_*`
    /// environment variables and the command line.
    fn parse_args(config_path: &Path) -> Result<Args, AppError> {
        let matches = Self::command().get_matches();

        let mut config_layers = vec![
            Layer::Env(Some(String::from(ENV_PREFIX))),
            Layer::Clap(matches),
        ];
        if config_path.exists() {
            config_layers.insert(0, Layer::Toml(config_path.to_path_buf()));
        }

        Self::with_layers(&config_layers).map_err(|e| match e {
            twelf::Error::Toml(_) => AppError::Server(format!(
                "Failed to parse config file '{}'",
                config_path.to_string_lossy()
            )),
            _ => AppError::Server(e.to_string()),
        })
    }

    pub fn init() -> Result<Config, AppError> {
        let initial_args = Args::parse();
        let config_path = initial_args.config.unwrap_or_else(get_config_path);

        let arguments = Args::parse_args(&config_path)?;

        SHOULD_SKIP_SERIALIZNG_FIELDS.store(true, Ordering::SeqCst);

        if arguments.init {
            arguments
                .generate_config(&config_path)
                .map_err(|e| AppError::Server(e.to_string()))?;
        }

        Config::from_args(arguments)
    }

    fn to_file(&self, file_path: &Path) -> Result<()> {
        let toml_string = toml::to_string(self).map_err(Error::new)?;
        let mut file = fs::File::create(file_path)?;
        file.write_all(toml_string.as_bytes())?;
        Ok(())
    }

    fn generate_config(&self, config_path: &Path) -> Result<()> {
        // validate before writing anything
        Config::from_args(self.clone()).map_err(Error::new)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        self.to_file(config_path)?;
        println!("\nConfig has been written to {config_path:?}");

        std::process::exit(0);
    }
}
