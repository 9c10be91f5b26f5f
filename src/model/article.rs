//! Domain models for article data operations.
//!
//! Defines the composed article read model and parameter types for article
//! operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::user::Author;

/// Article with its composed social-graph data.
///
/// Carries the owning author, the sorted tag list, and the derived favorite
/// count alongside the article fields themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Unique identifier for the article.
    pub id: i32,
    /// Globally unique slug derived from the title.
    pub slug: String,
    /// Article title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Full article body.
    pub body: String,
    /// Author of the article. Immutable after creation.
    pub author: Author,
    /// Tag names linked to the article, sorted for a stable order.
    pub tags: Vec<String>,
    /// Number of users who favorited the article (derived).
    pub favorites_count: u64,
    /// Timestamp when the article was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Assembles the domain model from its composed parts at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The article entity model from the database
    /// - `author` - The article's author
    /// - `tags` - Tag names linked to the article (sorted by the caller)
    /// - `favorites_count` - Derived favorite count
    ///
    /// # Returns
    /// - `Article` - The composed article domain model
    pub fn from_parts(
        entity: entity::article::Model,
        author: Author,
        tags: Vec<String>,
        favorites_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            body: entity.body,
            author,
            tags,
            favorites_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a new article.
///
/// Fields arrive pre-validated from the external validation layer.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    /// ID of the user who owns the article.
    pub author_id: i32,
    /// Article title; the slug is derived from it.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Full article body.
    pub body: String,
    /// Tag names to link; duplicates are collapsed, missing tag rows are
    /// created lazily.
    pub tags: Vec<String>,
}

/// Parameters for a partial article update.
///
/// `None` leaves a field untouched; an empty string is treated the same as
/// `None`. A provided tag list fully replaces the current tag set.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParams {
    /// ID of the article to update.
    pub id: i32,
    /// New title; regenerates the slug when provided.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New body.
    pub body: Option<String>,
    /// Replacement tag set; diffed against the current links.
    pub tags: Option<Vec<String>>,
}

/// Filters for the general article listing query.
///
/// Filters are AND-combined when more than one is given.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Only articles linked to this tag name.
    pub tag: Option<String>,
    /// Only articles authored by this username.
    pub author: Option<String>,
    /// Only articles favorited by this user id.
    pub favorited_by: Option<i32>,
}
