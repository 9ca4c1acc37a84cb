//! Users Domain
//!
//! Everything the service knows about a user, independent of transport.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ REST handlers│   │ gRPC adapter │  ← transport-specific decoding + errors
//! └──────┬───────┘   └──────┬───────┘
//!        └────────┬─────────┘
//!          ┌──────▼──────┐
//!          │   Service   │  ← UserOperations: email uniqueness, partial updates
//!          └──────┬──────┘
//!          ┌──────▼──────┐
//!          │ Repository  │  ← trait + SQL / in-memory implementations
//!          └──────┬──────┘
//!          ┌──────▼──────┐
//!          │   Entity    │  ← SeaORM model for the `users` table
//!          └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = Arc::new(UserService::new(InMemoryUserRepository::new()));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod storage;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{UserOperations, UserService};
pub use storage::SqlUserRepository;
