//! SeaORM entity models for the conduit persistence core.
//!
//! Entities map one-to-one onto the database tables and carry no business
//! logic. Repositories convert them to domain models at the data-layer
//! boundary.

pub mod prelude;

pub mod article;
pub mod article_tag;
pub mod comment;
pub mod favorite;
pub mod tag;
pub mod user;
