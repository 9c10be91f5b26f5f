//! Conduit persistence core.
//!
//! This crate is the transactional storage and social-graph aggregation layer
//! of a Conduit-style article service: articles, comments, tags, favorites,
//! and feed queries over a followed-author set. The HTTP routing, session
//! handling, and field-format validation live in external layers that call
//! into this one.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types grouped by concern
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection bootstrap with retry, liveness
//!   check, and migrations
//! - **Transactions** (`txn`) - Atomic wrapper for multi-statement units of work
//!
//! # Request Flow
//!
//! A typical caller flows through these layers:
//!
//! 1. The embedding service obtains a pooled [`sea_orm::DatabaseConnection`]
//!    once at startup via [`startup::connect_to_database`]
//! 2. A request handler constructs a repository from `data/` over that handle
//! 3. The repository queries the database, wrapping multi-statement writes in
//!    [`txn::run_in_txn`], and converts entities to domain models
//! 4. The handler serializes the returned domain models

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
pub mod txn;
pub mod util;
