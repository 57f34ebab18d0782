//! Bookmark factory for creating test bookmark entities.
//!
//! This module provides factory methods for creating bookmark entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookmarks with customizable fields.
///
/// Provides a builder pattern for creating bookmark entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bookmark::BookmarkFactory;
///
/// let bookmark = BookmarkFactory::new(&db)
///     .user_id(1)
///     .article_id(100)
///     .build()
///     .await?;
/// ```
pub struct BookmarkFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    article_id: i64,
}

impl<'a> BookmarkFactory<'a> {
    /// Creates a new BookmarkFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique value
    /// - article_id: auto-incremented unique value
    ///
    /// Unique defaults keep unrelated tests from tripping over the composite
    /// unique index on (user_id, article_id).
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BookmarkFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id(),
            article_id: next_id(),
        }
    }

    /// Sets the owning user id.
    ///
    /// # Arguments
    /// - `user_id` - User that owns the bookmark
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the bookmarked article id.
    ///
    /// # Arguments
    /// - `article_id` - Article the bookmark points at
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn article_id(mut self, article_id: i64) -> Self {
        self.article_id = article_id;
        self
    }

    /// Builds and inserts the bookmark entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bookmark::Model)` - Created bookmark entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bookmark::Model, DbErr> {
        entity::bookmark::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            article_id: ActiveValue::Set(self.article_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bookmark for the specified user and article.
///
/// Shorthand for `BookmarkFactory::new(db).user_id(user_id).article_id(article_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User that owns the bookmark
/// - `article_id` - Article the bookmark points at
///
/// # Returns
/// - `Ok(entity::bookmark::Model)` - Created bookmark entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let bookmark = create_bookmark(&db, 1, 100).await?;
/// ```
pub async fn create_bookmark(
    db: &DatabaseConnection,
    user_id: i64,
    article_id: i64,
) -> Result<entity::bookmark::Model, DbErr> {
    BookmarkFactory::new(db)
        .user_id(user_id)
        .article_id(article_id)
        .build()
        .await
}
