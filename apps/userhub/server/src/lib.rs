//! userhub: one user store, two front doors.
//!
//! ## Architecture
//!
//! ```text
//!  REST client (JSON)            gRPC client (Zstd)
//!        ↓                              ↓
//!  axum router (/users)      UsersServiceImpl (service.rs)
//!        ↓                              ↓  proto ↔ domain (conversions.rs)
//!        └──────────┬───────────────────┘
//!            UserService (domain_users)
//!                   ↓
//!            SqlUserRepository
//!                   ↓
//!          SQLite / PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: environment-driven settings for both listeners and the store
//! - `server`: composition root and listener lifecycle
//! - `service`: gRPC service implementation
//! - `conversions`: proto ↔ domain mapping

pub mod config;
pub mod conversions;
pub mod server;
pub mod service;

pub use config::AppConfig;
pub use server::run;
pub use service::UsersServiceImpl;
