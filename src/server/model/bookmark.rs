//! Domain models for bookmark data operations.

use chrono::{DateTime, Utc};

use crate::model::bookmark::{BookmarkDto, CreateBookmarkDto};

/// A user's bookmark on an article.
///
/// One row per (user, article) pair; the pair is unique in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    /// Unique identifier for the bookmark.
    pub id: i64,
    /// ID of the user that owns the bookmark.
    pub user_id: i64,
    /// ID of the bookmarked article.
    pub article_id: i64,
    /// Timestamp when the bookmark was created.
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Converts an entity model to a bookmark domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Bookmark` - The converted bookmark domain model
    pub fn from_entity(entity: entity::bookmark::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            article_id: entity.article_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the bookmark to a DTO for API responses.
    ///
    /// # Returns
    /// - `BookmarkDto` - The converted bookmark DTO
    pub fn into_dto(self) -> BookmarkDto {
        BookmarkDto {
            id: self.id,
            user_id: self.user_id,
            article_id: self.article_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new bookmark.
#[derive(Debug, Clone)]
pub struct CreateBookmarkParam {
    /// ID of the user that owns the bookmark.
    pub user_id: i64,
    /// ID of the article to bookmark.
    pub article_id: i64,
}

impl CreateBookmarkParam {
    /// Builds creation parameters from the request path and body.
    ///
    /// # Arguments
    /// - `article_id` - Article taken from the request path
    /// - `dto` - Request body carrying the bookmark owner
    ///
    /// # Returns
    /// - `CreateBookmarkParam` - Parameters for the bookmark service
    pub fn from_dto(article_id: i64, dto: CreateBookmarkDto) -> Self {
        Self {
            user_id: dto.user_id,
            article_id,
        }
    }
}
