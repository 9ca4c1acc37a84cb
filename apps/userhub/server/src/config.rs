use core_config::{ConfigError, Environment, FromEnv, env_parse, server::ServerConfig};
use database::sql::SqlConfig;
use std::time::Duration;

/// Default delay between `StreamUsers` messages
pub const DEFAULT_STREAM_PACING_MS: u64 = 100;

/// Server-streaming behaviour of the gRPC adapter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Zero sends every message back to back
    pub pacing: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(DEFAULT_STREAM_PACING_MS),
        }
    }
}

impl FromEnv for StreamConfig {
    /// Reads `STREAM_PACING_MS` (default 100, `0` disables pacing).
    fn from_env() -> Result<Self, ConfigError> {
        let millis: u64 = env_parse("STREAM_PACING_MS", &DEFAULT_STREAM_PACING_MS.to_string())?;
        Ok(Self {
            pacing: Duration::from_millis(millis),
        })
    }
}

/// Application configuration
/// Composes shared config components from the library crates
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    /// REST listener, `HOST`/`PORT`
    pub http: ServerConfig,
    /// gRPC listener, `GRPC_HOST`/`GRPC_PORT`
    pub grpc: grpc_client::server::ServerConfig,
    pub database: SqlConfig,
    pub stream: StreamConfig,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            environment: Environment::from_env(),
            http: ServerConfig::from_env()?,
            grpc: grpc_client::server::ServerConfig::from_env()?,
            database: SqlConfig::from_env()?,
            stream: StreamConfig::from_env()?,
        })
    }
}
