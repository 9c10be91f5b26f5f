//! Atomic wrapper for multi-statement units of work.
//!
//! Every multi-statement write in the data layer (article create with tag
//! links, update with tag diff, cascading delete) goes through
//! [`run_in_txn`] so it is either fully applied or fully absent.

use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::error::data::DataError;

/// Runs a unit of work inside a database transaction.
///
/// Begins a transaction, invokes `op` with the transactional handle, and:
/// - on success: commits, returning any commit failure verbatim;
/// - on failure: rolls back and returns the original error. If the rollback
///   itself fails, both errors are combined in
///   [`DataError::RollbackFailed`] so neither cause is dropped.
///
/// No partial writes are visible outside the transaction boundary on any
/// exit path. A caller that drops the returned future mid-flight abandons
/// the uncommitted transaction, which the pool rolls back when the
/// connection is reclaimed.
///
/// Generic over [`TransactionTrait`], so a unit of work can itself open a
/// nested transaction (SeaORM savepoints) against the handle it received.
///
/// # Arguments
/// - `db` - Connection (or enclosing transaction) to begin the transaction on
/// - `op` - Unit of work receiving the transactional handle
///
/// # Returns
/// - `Ok(T)` - The unit of work succeeded and the transaction committed
/// - `Err(DataError)` - The unit of work, commit, or rollback failed
pub async fn run_in_txn<C, F, T>(db: &C, op: F) -> Result<T, DataError>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<T, DataError>> + Send + 'c>>,
{
    let txn = db.begin().await?;

    match op(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => match txn.rollback().await {
            Ok(()) => Err(err),
            Err(rollback) => {
                tracing::error!("rollback failed after unit of work error: {}", rollback);
                Err(DataError::RollbackFailed {
                    cause: Box::new(err),
                    rollback,
                })
            }
        },
    }
}
