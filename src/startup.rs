use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    config::Config,
    error::{connection::ConnectionError, AppError},
};

/// Maximum number of attempts to open the pooled connection.
const CONNECT_ATTEMPTS: u32 = 10;

/// Fixed delay between open attempts.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Connects to the PostgreSQL database and runs pending migrations.
///
/// Establishes a pooled connection using the connection string from
/// configuration, retrying a bounded number of times to ride out store
/// startup races, then verifies liveness with a ping and runs all pending
/// SeaORM migrations. This function must complete successfully before the
/// application can access the database.
///
/// The returned handle is the process-wide pool: opened once here, passed by
/// reference into every repository, and closed by the embedding binary at
/// shutdown.
///
/// # Arguments
/// - `config` - Application configuration containing the database credentials
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::ConnectionErr)` - Open attempts exhausted, liveness check
///   failed, or migrations failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    let db = connect_with_retry(&opt).await?;

    // A pool that opens but cannot answer a ping is fatal, not retried.
    db.ping().await.map_err(ConnectionError::Ping)?;

    Migrator::up(&db, None)
        .await
        .map_err(ConnectionError::Migrate)?;

    Ok(db)
}

/// Opens the pooled connection, retrying up to `CONNECT_ATTEMPTS` times with
/// a fixed delay. The last open error is surfaced when attempts run out.
async fn connect_with_retry(opt: &ConnectOptions) -> Result<DatabaseConnection, ConnectionError> {
    let mut attempt = 1;
    loop {
        match Database::connect(opt.clone()).await {
            Ok(db) => return Ok(db),
            Err(err) => {
                if attempt >= CONNECT_ATTEMPTS {
                    return Err(ConnectionError::Open(err));
                }
                tracing::warn!(
                    "database connect attempt {}/{} failed: {}",
                    attempt,
                    CONNECT_ATTEMPTS,
                    err
                );
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                attempt += 1;
            }
        }
    }
}
