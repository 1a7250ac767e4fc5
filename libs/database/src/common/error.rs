use thiserror::Error;

/// Error type shared by all database utilities in this crate
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Underlying SeaORM error
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection could not be established, even after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A readiness probe against the database failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Bad or missing connection settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Schema migration failed to apply
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
