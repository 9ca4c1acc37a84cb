//! # Axum Helpers
//!
//! Shared pieces of the REST surface.
//!
//! - **[`errors`]**: [`AppError`] and the JSON error envelope
//! - **[`extractors`]**: [`ValidatedJson`] and [`IdPath`]
//! - **[`server`]**: router assembly, health/readiness, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{ShutdownCoordinator, create_router, health_router, serve};
//!
//! let shutdown = ShutdownCoordinator::new();
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router()));
//! serve(listener, router, shutdown.cancelled()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_router, health_router,
    run_health_checks, shutdown_signal,
};
