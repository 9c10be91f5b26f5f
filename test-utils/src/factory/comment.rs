//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on an article with a generated body.
///
/// # Arguments
/// - `db` - Database connection
/// - `article_id` - ID of an existing article
/// - `author_id` - ID of an existing user
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    let now = Utc::now();
    entity::comment::ActiveModel {
        body: ActiveValue::Set(format!("Comment {}", next_id())),
        article_id: ActiveValue::Set(article_id),
        author_id: ActiveValue::Set(author_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
