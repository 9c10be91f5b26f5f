//! Article factory for creating test article entities.
//!
//! Creates article rows directly at the entity level, bypassing the
//! repository layer, so repository tests can seed state independently of
//! the code under test.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// Provides a builder pattern for creating article entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db, author.id)
///     .title("Ownership and Borrowing")
///     .created_at(two_days_ago)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    slug: String,
    title: String,
    description: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"article-{id}"` where id is auto-incremented
    /// - title: `"Article {id}"`
    /// - description: `"Description {id}"`
    /// - body: `"Body {id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of an existing user who owns the article
    ///
    /// # Returns
    /// - `ArticleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            slug: format!("article-{}", id),
            title: format!("Article {}", id),
            description: format!("Description {}", id),
            body: format!("Body {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the slug for the article.
    ///
    /// # Arguments
    /// - `slug` - Unique slug string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the title for the article.
    ///
    /// # Arguments
    /// - `title` - Article title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the body for the article.
    ///
    /// # Arguments
    /// - `body` - Article body text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the creation timestamp for the article.
    ///
    /// Useful for tests that assert ordering by recency.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// `updated_at` is set equal to `created_at`, matching a freshly
    /// created article.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
///
/// Shorthand for `ArticleFactory::new(db, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - ID of an existing user who owns the article
///
/// # Returns
/// - `Ok(entity::article::Model)` - Created article entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id).build().await
}
