//! HTTP server bootstrap: router assembly, health endpoints and graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_router, serve};
pub use health::{HealthCheckFuture, HealthResponse, ReadinessResult, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
