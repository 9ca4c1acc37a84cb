//! Listener settings for gRPC servers.

use core_config::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::GrpcError;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Accept and send Zstd-compressed messages
    pub enable_compression: bool,
    pub max_decoding_message_size: usize,
    pub max_encoding_message_size: usize,
    pub keepalive_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            max_decoding_message_size: 8 * 1024 * 1024,
            max_encoding_message_size: 8 * 1024 * 1024,
            keepalive_secs: 60,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        self.addr_string()
            .parse()
            .map_err(|_| GrpcError::InvalidAddress(self.addr_string()))
    }

    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tcp_keepalive(&self) -> Option<Duration> {
        (self.keepalive_secs > 0).then(|| Duration::from_secs(self.keepalive_secs))
    }
}

/// Environment variables:
/// - `GRPC_HOST` (default: 0.0.0.0)
/// - `GRPC_PORT` (default: 50051)
/// - `GRPC_COMPRESSION` (default: true)
/// - `GRPC_MAX_MESSAGE_SIZE` (default: 8 MiB, both directions)
/// - `GRPC_KEEPALIVE_SECS` (default: 60, 0 = off)
impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", "8388608")?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", "0.0.0.0"),
            port: env_parse("GRPC_PORT", "50051")?,
            enable_compression: env_parse("GRPC_COMPRESSION", "true")?,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
            keepalive_secs: env_parse("GRPC_KEEPALIVE_SECS", "60")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.addr_string(), "0.0.0.0:50051");
        assert!(config.enable_compression);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("6000")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_KEEPALIVE_SECS", Some("0")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "127.0.0.1:6000");
                assert!(!config.enable_compression);
                assert_eq!(config.tcp_keepalive(), None);
            },
        );
    }

    #[test]
    fn from_env_rejects_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn unparseable_host_is_an_invalid_address() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(matches!(config.socket_addr(), Err(GrpcError::InvalidAddress(_))));
    }
}
