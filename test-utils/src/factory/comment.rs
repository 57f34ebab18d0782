//! Comment factory for creating test comment entities.
//!
//! This module provides factory methods for creating comment entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern, including creating comments that
//! are already soft-deleted.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Provides a builder pattern for creating comment entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let comment = CommentFactory::new(&db)
///     .article_id(100)
///     .user_id(1)
///     .content("Custom comment")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i64,
    user_id: i64,
    content: String,
    reply_count: i64,
    soft_deleted: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - article_id: auto-incremented unique value
    /// - user_id: auto-incremented unique value
    /// - content: `"Test comment {id}"` where id is auto-incremented
    /// - reply_count: `0`
    /// - not soft-deleted
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            article_id: next_id(),
            user_id: next_id(),
            content: format!("Test comment {}", id),
            reply_count: 0,
            soft_deleted: false,
        }
    }

    /// Sets the article the comment belongs to.
    ///
    /// # Arguments
    /// - `article_id` - Article the comment is posted on
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn article_id(mut self, article_id: i64) -> Self {
        self.article_id = article_id;
        self
    }

    /// Sets the comment author.
    ///
    /// # Arguments
    /// - `user_id` - User that wrote the comment
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the comment content.
    ///
    /// # Arguments
    /// - `content` - Comment body text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the denormalized reply counter.
    ///
    /// Tests creating reply rows by hand should keep this in sync with the
    /// number of live replies so the state matches the counter invariant.
    ///
    /// # Arguments
    /// - `reply_count` - Number of live replies the comment claims to have
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn reply_count(mut self, reply_count: i64) -> Self {
        self.reply_count = reply_count;
        self
    }

    /// Marks the comment as soft-deleted (`deleted_at` set at build time).
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn soft_deleted(mut self) -> Self {
        self.soft_deleted = true;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();

        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            article_id: ActiveValue::Set(self.article_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            reply_count: ActiveValue::Set(self.reply_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.soft_deleted.then_some(now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default content on the specified article.
///
/// Shorthand for `CommentFactory::new(db).article_id(article_id).user_id(user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `article_id` - Article the comment is posted on
/// - `user_id` - User that wrote the comment
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let comment = create_comment(&db, 100, 1).await?;
/// ```
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i64,
    user_id: i64,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db)
        .article_id(article_id)
        .user_id(user_id)
        .build()
        .await
}
