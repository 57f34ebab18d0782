//! Reply data repository for database operations.
//!
//! This module provides the `ReplyStore` trait and its SeaORM-backed implementation
//! `ReplyRepository`. Reply creation and deletion adjust the parent comment's
//! denormalized reply_count inside the same database transaction as the row change,
//! and deletion purges a soft-deleted parent once its last reply is removed. The
//! counter moves through atomic column expressions rather than read-modify-write,
//! so concurrent operations against the same parent cannot lose updates.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::ExprTrait, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::reply::{CreateReplyParam, Reply};

/// Storage operations required by the reply service.
#[async_trait]
pub trait ReplyStore {
    /// Inserts a new reply and increments the parent comment's reply count.
    ///
    /// Both writes happen in one transaction; a failure of either rolls back
    /// the other.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing comment_id, user_id, and content
    ///
    /// # Returns
    /// - `Ok(Reply)` - The created reply with generated ID and timestamps
    /// - `Err(DbErr)` - Database error; no row was inserted and no counter moved
    async fn insert(&self, param: CreateReplyParam) -> Result<Reply, DbErr>;

    /// Gets a reply by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the reply to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Reply))` - The reply with the given ID
    /// - `Ok(None)` - No reply exists with the given ID
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_id(&self, id: i64) -> Result<Option<Reply>, DbErr>;

    /// Gets one page of replies for a comment using cursor pagination.
    ///
    /// Returns replies with `id > cursor` (all replies when the cursor is absent),
    /// ordered ascending by ID and capped at `limit` rows.
    ///
    /// # Arguments
    /// - `comment_id` - ID of the comment whose replies to list
    /// - `cursor` - ID of the last reply from the previous page, if any
    /// - `limit` - Maximum number of replies to return
    ///
    /// # Returns
    /// - `Ok(Vec<Reply>)` - Replies on the page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    async fn list_after(
        &self,
        comment_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<Vec<Reply>, DbErr>;

    /// Updates a reply's content and bumps its updated_at timestamp.
    ///
    /// # Arguments
    /// - `id` - ID of the reply to update
    /// - `content` - Replacement body text
    ///
    /// # Returns
    /// - `Ok(Some(Reply))` - The updated reply
    /// - `Ok(None)` - The reply row no longer exists
    /// - `Err(DbErr)` - Database error during update operation
    async fn update_content(&self, id: i64, content: String) -> Result<Option<Reply>, DbErr>;

    /// Deletes a reply, decrements the parent comment's reply count, and purges
    /// the parent when it was soft-deleted and this was its last reply.
    ///
    /// All steps run in one transaction, so a crash can never strand a
    /// soft-deleted comment with no remaining replies.
    ///
    /// # Arguments
    /// - `id` - ID of the reply to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The reply was deleted and the parent reconciled
    /// - `Ok(false)` - No reply with the given ID existed; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction rolled back
    async fn delete_cascading(&self, id: i64) -> Result<bool, DbErr>;
}

/// Repository providing database operations for reply management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting reply records while keeping the
/// parent comment's reply_count consistent with the live reply rows.
pub struct ReplyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyRepository<'a> {
    /// Creates a new ReplyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReplyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReplyStore for ReplyRepository<'_> {
    async fn insert(&self, param: CreateReplyParam) -> Result<Reply, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let entity = entity::reply::ActiveModel {
            comment_id: ActiveValue::Set(param.comment_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(param.comment_id))
            .col_expr(
                entity::comment::Column::ReplyCount,
                sea_orm::sea_query::Expr::col(entity::comment::Column::ReplyCount).add(1),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Reply::from_entity(entity))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Reply>, DbErr> {
        let entity = entity::prelude::Reply::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Reply::from_entity))
    }

    async fn list_after(
        &self,
        comment_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<Vec<Reply>, DbErr> {
        let mut query = entity::prelude::Reply::find()
            .filter(entity::reply::Column::CommentId.eq(comment_id));

        if let Some(cursor) = cursor {
            query = query.filter(entity::reply::Column::Id.gt(cursor));
        }

        let entities = query
            .order_by_asc(entity::reply::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reply::from_entity).collect())
    }

    async fn update_content(&self, id: i64, content: String) -> Result<Option<Reply>, DbErr> {
        let reply = match entity::prelude::Reply::find_by_id(id).one(self.db).await? {
            Some(reply) => reply,
            None => return Ok(None),
        };

        let mut active_model: entity::reply::ActiveModel = reply.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        match active_model.update(self.db).await {
            Ok(entity) => Ok(Some(Reply::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn delete_cascading(&self, id: i64) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        // Re-read inside the transaction so the parent lookup and the delete
        // agree on which reply is being removed.
        let reply = match entity::prelude::Reply::find_by_id(id).one(&txn).await? {
            Some(reply) => reply,
            None => {
                txn.rollback().await?;
                return Ok(false);
            }
        };
        let comment_id = reply.comment_id;

        entity::prelude::Reply::delete_by_id(id).exec(&txn).await?;

        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(comment_id))
            .col_expr(
                entity::comment::Column::ReplyCount,
                sea_orm::sea_query::Expr::col(entity::comment::Column::ReplyCount).sub(1),
            )
            .exec(&txn)
            .await?;

        // A soft-deleted parent is only kept alive by its replies; purge it
        // once the last one is gone.
        let parent = entity::prelude::Comment::find_by_id(comment_id)
            .one(&txn)
            .await?;

        if let Some(parent) = parent {
            if parent.reply_count <= 0 && parent.deleted_at.is_some() {
                entity::prelude::Comment::delete_by_id(comment_id)
                    .exec(&txn)
                    .await?;
            }
        }

        txn.commit().await?;

        Ok(true)
    }
}
