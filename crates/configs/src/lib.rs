//! # configs
//!
//! Typed runtime configuration for the Fishlog binary.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `fishlog.toml` next to the working directory, then `FISHLOG_*`
//! environment variables (`FISHLOG_SERVER__PORT=9000`). A `.env` file is
//! loaded before the environment is read.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// The address string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// An `EnvFilter` directive string, e.g. "info" or "fishlog=debug,info".
    pub filter: String,
}

/// Loads configuration from defaults, optional file, and environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    // Ignore a missing .env; only dev setups carry one.
    dotenvy::dotenv().ok();

    let config = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8000)?
        .set_default("log.filter", "info")?
        .add_source(config::File::with_name("fishlog").required(false))
        .add_source(config::Environment::with_prefix("FISHLOG").separator("__"))
        .build()?;

    let cfg: AppConfig = config.try_deserialize()?;
    debug!(
        host = %cfg.server.host,
        port = cfg.server.port,
        filter = %cfg.log.filter,
        "configuration loaded"
    );
    Ok(cfg)
}
