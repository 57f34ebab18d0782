//! Comment data repository for database operations.
//!
//! This module provides the `CommentStore` trait and its SeaORM-backed implementation
//! `CommentRepository`. Soft and hard deletes report the number of rows they touched
//! so the service layer can distinguish a successful delete from a row that vanished
//! between its existence check and the delete statement.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::comment::{Comment, CreateCommentParam};

/// Storage operations required by the comment service.
#[async_trait]
pub trait CommentStore {
    /// Inserts a new comment with a reply count of zero.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing article_id, user_id, and content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with generated ID and timestamps
    /// - `Err(DbErr)` - Database error during insert operation
    async fn insert(&self, param: CreateCommentParam) -> Result<Comment, DbErr>;

    /// Gets a comment by ID, including soft-deleted rows.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The comment with the given ID
    /// - `Ok(None)` - No comment row exists with the given ID
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DbErr>;

    /// Gets one page of comments for an article using cursor pagination.
    ///
    /// Returns comments with `id > cursor` (all comments when the cursor is absent),
    /// ordered ascending by ID and capped at `limit` rows. Soft-deleted comments are
    /// included; masking their author and content is the caller's concern.
    ///
    /// # Arguments
    /// - `article_id` - ID of the article whose comments to list
    /// - `cursor` - ID of the last comment from the previous page, if any
    /// - `limit` - Maximum number of comments to return
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    async fn list_after(
        &self,
        article_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<Vec<Comment>, DbErr>;

    /// Updates a comment's content and bumps its updated_at timestamp.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to update
    /// - `content` - Replacement body text
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - The comment row no longer exists
    /// - `Err(DbErr)` - Database error during update operation
    async fn update_content(&self, id: i64, content: String) -> Result<Option<Comment>, DbErr>;

    /// Marks a comment as deleted by setting its deleted_at timestamp.
    ///
    /// Only rows that are not already soft-deleted are touched, so a repeated
    /// soft delete reports `false`.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to soft-delete
    ///
    /// # Returns
    /// - `Ok(true)` - The comment was marked deleted
    /// - `Ok(false)` - No live comment with the given ID existed
    /// - `Err(DbErr)` - Database error during update operation
    async fn soft_delete(&self, id: i64) -> Result<bool, DbErr>;

    /// Removes a comment row entirely.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The comment row was deleted
    /// - `Ok(false)` - No comment with the given ID existed
    /// - `Err(DbErr)` - Database error during delete operation
    async fn hard_delete(&self, id: i64) -> Result<bool, DbErr>;
}

/// Repository providing database operations for comment management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting comment records, including the
/// soft-delete bookkeeping used while replies still reference a comment.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentStore for CommentRepository<'_> {
    async fn insert(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(param.article_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            reply_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    async fn list_after(
        &self,
        article_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<Vec<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id));

        if let Some(cursor) = cursor {
            query = query.filter(entity::comment::Column::Id.gt(cursor));
        }

        let entities = query
            .order_by_asc(entity::comment::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    async fn update_content(&self, id: i64, content: String) -> Result<Option<Comment>, DbErr> {
        let comment = match entity::prelude::Comment::find_by_id(id).one(self.db).await? {
            Some(comment) => comment,
            None => return Ok(None),
        };

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        // The row can disappear between the fetch and the update; report that
        // as absence rather than an error.
        match active_model.update(self.db).await {
            Ok(entity) => Ok(Some(Comment::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .col_expr(
                entity::comment::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn hard_delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
