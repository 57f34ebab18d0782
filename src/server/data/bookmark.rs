//! Bookmark data repository for database operations.
//!
//! This module provides the `BookmarkStore` trait and its SeaORM-backed implementation
//! `BookmarkRepository`. Duplicate bookmarks are detected at this boundary through the
//! unique index over (user_id, article_id) rather than a pre-check query, so two
//! concurrent creates cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use crate::server::model::bookmark::{Bookmark, CreateBookmarkParam};

/// Storage operations required by the bookmark service.
#[async_trait]
pub trait BookmarkStore {
    /// Inserts a new bookmark.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing user_id and article_id
    ///
    /// # Returns
    /// - `Ok(Some(Bookmark))` - The created bookmark with generated ID
    /// - `Ok(None)` - A bookmark for this user and article already exists
    /// - `Err(DbErr)` - Database error during insert operation
    async fn insert(&self, param: CreateBookmarkParam) -> Result<Option<Bookmark>, DbErr>;

    /// Gets a bookmark by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the bookmark to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Bookmark))` - The bookmark with the given ID
    /// - `Ok(None)` - No bookmark exists with the given ID
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, DbErr>;

    /// Gets all bookmarks owned by a user, in storage order.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Bookmark>)` - All bookmarks for the user, possibly empty
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, DbErr>;

    /// Gets the bookmark a user placed on a specific article, if any.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    /// - `article_id` - ID of the article
    ///
    /// # Returns
    /// - `Ok(Some(Bookmark))` - The user has bookmarked the article
    /// - `Ok(None)` - No bookmark exists for this pair
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_user_and_article(
        &self,
        user_id: i64,
        article_id: i64,
    ) -> Result<Option<Bookmark>, DbErr>;

    /// Deletes a bookmark by ID, reporting whether a row was removed.
    ///
    /// # Arguments
    /// - `id` - ID of the bookmark to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The bookmark was deleted
    /// - `Ok(false)` - No bookmark with the given ID existed
    /// - `Err(DbErr)` - Database error during delete operation
    async fn delete(&self, id: i64) -> Result<bool, DbErr>;
}

/// Repository providing database operations for bookmark management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and deleting bookmark records.
pub struct BookmarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkRepository<'a> {
    /// Creates a new BookmarkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookmarkRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkStore for BookmarkRepository<'_> {
    async fn insert(&self, param: CreateBookmarkParam) -> Result<Option<Bookmark>, DbErr> {
        let result = entity::bookmark::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            article_id: ActiveValue::Set(param.article_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        // The unique (user_id, article_id) index reports duplicates as a
        // constraint violation, which callers see as Ok(None).
        match result {
            Ok(entity) => Ok(Some(Bookmark::from_entity(entity))),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, DbErr> {
        let entity = entity::prelude::Bookmark::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Bookmark::from_entity))
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, DbErr> {
        let entities = entity::prelude::Bookmark::find()
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bookmark::from_entity).collect())
    }

    async fn find_by_user_and_article(
        &self,
        user_id: i64,
        article_id: i64,
    ) -> Result<Option<Bookmark>, DbErr> {
        let entity = entity::prelude::Bookmark::find()
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .filter(entity::bookmark::Column::ArticleId.eq(article_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Bookmark::from_entity))
    }

    async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Bookmark::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
