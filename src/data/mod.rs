//! Database repository layer for article-related entities.
//!
//! This module contains the repository that handles database operations for
//! articles, tags, favorites, and comments. The repository uses SeaORM entity
//! models internally and returns domain models to maintain separation between
//! the data layer and the layers above it. All database queries, inserts,
//! updates, and deletes are performed through this repository; multi-statement
//! writes go through [`crate::txn::run_in_txn`].

pub mod article;

#[cfg(test)]
mod test;
