//! Domain models for comment data operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::user::Author;

/// Comment on an article with its composed author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Unique identifier for the comment.
    pub id: i32,
    /// Comment body text.
    pub body: String,
    /// ID of the commented article. Immutable after creation.
    pub article_id: i32,
    /// Author of the comment. Immutable after creation.
    pub author: Author,
    /// Timestamp when the comment was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Assembles the domain model from its composed parts at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The comment entity model from the database
    /// - `author` - The comment's author
    ///
    /// # Returns
    /// - `Comment` - The composed comment domain model
    pub fn from_parts(entity: entity::comment::Model, author: Author) -> Self {
        Self {
            id: entity.id,
            body: entity.body,
            article_id: entity.article_id,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a comment on an existing article.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    /// ID of the article being commented on.
    pub article_id: i32,
    /// ID of the commenting user.
    pub author_id: i32,
    /// Comment body text.
    pub body: String,
}
