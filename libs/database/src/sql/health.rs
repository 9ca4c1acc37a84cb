use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Probe the store with `SELECT 1` using the pool's own backend dialect.
///
/// Backs the `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1");
    db.query_one(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{connect_from_config, SqlConfig};

    #[tokio::test]
    async fn in_memory_store_is_healthy() {
        let db = connect_from_config(SqlConfig::in_memory()).await.unwrap();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn closed_pool_reports_unhealthy() {
        let db = connect_from_config(SqlConfig::in_memory()).await.unwrap();
        let probe = db.clone();
        db.close().await.unwrap();

        let err = check_health(&probe).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
    }
}
