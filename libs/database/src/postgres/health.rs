use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Verify the connection can run a trivial query.
///
/// Issues `SELECT 1` and maps any failure into
/// `DatabaseError::HealthCheckFailed`. Readiness probes call this on
/// every poll, so it stays deliberately cheap.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("running postgres health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    debug!("postgres health check passed");
    Ok(())
}
