use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connect, retrying with exponential backoff while the store is unreachable.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Bring the schema up to date before any request is served.
///
/// Migrations are idempotent: already-applied steps are skipped.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::Migrator;
    use sea_orm::Statement;

    #[tokio::test]
    async fn in_memory_store_accepts_migrations_twice() {
        let db = connect_from_config(SqlConfig::in_memory()).await.unwrap();

        run_migrations::<Migrator>(&db, "test").await.unwrap();
        run_migrations::<Migrator>(&db, "test").await.unwrap();

        let stmt = Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS n FROM users",
        );
        let row = db.query_one(stmt).await.unwrap().unwrap();
        let count: i64 = row.try_get("", "n").unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn unreachable_store_fails_after_retries() {
        let config = SqlConfig::new("postgres://nobody@127.0.0.1:1/none");
        let policy = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(1)
            .without_jitter();

        let result = connect_from_config_with_retry(config, Some(policy)).await;
        assert!(result.is_err());
    }
}
