//! Author read model.

use serde::Serialize;

/// Article or comment author as exposed by this core.
///
/// Users are owned by the external user-management service; this is the
/// read-only projection composed into articles and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Unique identifier of the user.
    pub id: i32,
    /// Unique username.
    pub username: String,
    /// Optional profile biography.
    pub bio: Option<String>,
    /// Optional profile image URL.
    pub image: Option<String>,
}

impl Author {
    /// Converts an entity model to an author domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Author` - The converted author domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            bio: entity.bio,
            image: entity.image,
        }
    }
}
