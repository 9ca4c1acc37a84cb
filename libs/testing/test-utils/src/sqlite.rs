//! In-memory SQLite test infrastructure
//!
//! Each `TestDatabase` is a private `sqlite::memory:` store on a single pooled
//! connection, migrated to the current schema. It disappears on drop.

use database::sql::{SqlConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database wrapper
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new, empty, fully migrated database
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqlConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to migrate test database");

        tracing::debug!("Test database ready (SQLite in-memory)");

        Self { connection }
    }

    /// A handle to the same store; every clone sees the same rows.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
