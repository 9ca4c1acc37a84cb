//! Persistence gateway for relational stores
//!
//! Owns how the process opens its single shared connection pool, reconciles the
//! schema at startup and probes the store for readiness. The pool handle is
//! created once by the composition root and handed to repositories; nothing in
//! here keeps a global connection.
//!
//! # Features
//!
//! - `sql` (default) - SeaORM connector (SQLite, Postgres)
//! - `config` - `core_config::FromEnv` support for [`sql::SqlConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config_with_retry(SqlConfig::new("sqlite://users.db?mode=rwc"), None).await?;
//! sql::run_migrations::<Migrator>(&db, "userhub").await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
