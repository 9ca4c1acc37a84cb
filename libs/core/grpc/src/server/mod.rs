//! gRPC server configuration and startup helpers.

mod builder;
mod config;

pub use builder::{create_health_service, GrpcServer};
pub use config::ServerConfig;
