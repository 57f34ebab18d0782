//! Reply factory for creating test reply entities.
//!
//! This module provides factory methods for creating reply entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.
//!
//! Factories insert raw rows; they do not touch the parent comment's
//! `reply_count`. Use `helpers::create_comment_with_replies` when a test
//! needs the counter and the reply rows to agree.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test replies with customizable fields.
///
/// Provides a builder pattern for creating reply entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reply::ReplyFactory;
///
/// let reply = ReplyFactory::new(&db, comment.id)
///     .user_id(1)
///     .content("Custom reply")
///     .build()
///     .await?;
/// ```
pub struct ReplyFactory<'a> {
    db: &'a DatabaseConnection,
    comment_id: i64,
    user_id: i64,
    content: String,
}

impl<'a> ReplyFactory<'a> {
    /// Creates a new ReplyFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique value
    /// - content: `"Test reply {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `comment_id` - Comment the reply belongs to
    ///
    /// # Returns
    /// - `ReplyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, comment_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            comment_id,
            user_id: next_id(),
            content: format!("Test reply {}", id),
        }
    }

    /// Sets the reply author.
    ///
    /// # Arguments
    /// - `user_id` - User that wrote the reply
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the reply content.
    ///
    /// # Arguments
    /// - `content` - Reply body text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the reply entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reply::Model)` - Created reply entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reply::Model, DbErr> {
        let now = Utc::now();

        entity::reply::ActiveModel {
            id: ActiveValue::NotSet,
            comment_id: ActiveValue::Set(self.comment_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reply with default content under the specified comment.
///
/// Shorthand for `ReplyFactory::new(db, comment_id).user_id(user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `comment_id` - Comment the reply belongs to
/// - `user_id` - User that wrote the reply
///
/// # Returns
/// - `Ok(entity::reply::Model)` - Created reply entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let reply = create_reply(&db, comment.id, 1).await?;
/// ```
pub async fn create_reply(
    db: &DatabaseConnection,
    comment_id: i64,
    user_id: i64,
) -> Result<entity::reply::Model, DbErr> {
    ReplyFactory::new(db, comment_id)
        .user_id(user_id)
        .build()
        .await
}
