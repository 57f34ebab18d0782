//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a comment together with the given number of live replies.
///
/// The comment's `reply_count` column is set to match the number of reply
/// rows, so the created state satisfies the counter invariant the
/// application maintains transactionally.
///
/// # Arguments
/// - `db` - Database connection
/// - `replies` - Number of reply rows to create under the comment
///
/// # Returns
/// - `Ok((comment, replies))` - The created comment and its replies
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_replies(
    db: &DatabaseConnection,
    replies: usize,
) -> Result<(entity::comment::Model, Vec<entity::reply::Model>), DbErr> {
    let comment = crate::factory::comment::CommentFactory::new(db)
        .reply_count(replies as i64)
        .build()
        .await?;

    let mut created = Vec::with_capacity(replies);
    for _ in 0..replies {
        created.push(crate::factory::reply::create_reply(db, comment.id, next_id()).await?);
    }

    Ok((comment, created))
}

/// Creates a soft-deleted comment kept alive by the given number of replies.
///
/// Shorthand for the state a comment reaches when its owner deletes it while
/// replies still reference it: `deleted_at` set, `reply_count` matching the
/// live reply rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `replies` - Number of reply rows keeping the comment alive
///
/// # Returns
/// - `Ok((comment, replies))` - The soft-deleted comment and its replies
/// - `Err(DbErr)` - Database error during creation
pub async fn create_soft_deleted_comment_with_replies(
    db: &DatabaseConnection,
    replies: usize,
) -> Result<(entity::comment::Model, Vec<entity::reply::Model>), DbErr> {
    let comment = crate::factory::comment::CommentFactory::new(db)
        .reply_count(replies as i64)
        .soft_deleted()
        .build()
        .await?;

    let mut created = Vec::with_capacity(replies);
    for _ in 0..replies {
        created.push(crate::factory::reply::create_reply(db, comment.id, next_id()).await?);
    }

    Ok((comment, created))
}
