use sea_orm::DbErr;
use thiserror::Error;

/// Failures while bootstrapping the pooled database connection.
///
/// All variants are fatal: connection bootstrap runs once at process start
/// and the process cannot proceed without a live store.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// Opening the connection failed on every retry attempt.
    ///
    /// Carries the error from the final attempt.
    #[error("Failed to open database connection after retries: {0}")]
    Open(#[source] DbErr),

    /// The connection opened but the liveness check failed.
    ///
    /// Not retried; a pool that opens but cannot answer a ping points at a
    /// misconfigured or unhealthy store rather than a transient outage.
    #[error("Database liveness check failed: {0}")]
    Ping(#[source] DbErr),

    /// Running pending migrations failed.
    #[error("Failed to run database migrations: {0}")]
    Migrate(#[source] DbErr),
}
