//! Error types grouped by concern.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; the
//! external serving layer maps variants to its own response vocabulary
//! (`NotFound` to a missing-resource outcome, `Conflict` to a duplicate-resource
//! outcome, everything else to a generic failure).

pub mod config;
pub mod connection;
pub mod data;

use thiserror::Error;

use crate::error::{config::ConfigError, connection::ConnectionError, data::DataError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in this crate. Variants use
/// `#[from]` for automatic conversion at `?` sites.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure to bootstrap the pooled database connection.
    ///
    /// Fatal: the process cannot serve requests without a store.
    #[error(transparent)]
    ConnectionErr(#[from] ConnectionError),

    /// Error from a data-layer operation.
    #[error(transparent)]
    DataErr(#[from] DataError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
