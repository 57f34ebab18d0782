use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::{CommentRepository, CommentStore},
    error::AppError,
    model::comment::{Comment, CommentPage, CreateCommentParam, UpdateCommentParam},
};

pub struct CommentService<S> {
    store: S,
}

impl<'a> CommentService<CommentRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: CommentRepository::new(db),
        }
    }
}

impl<S: CommentStore> CommentService<S> {
    /// Creates a service on top of any comment store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Posts a new comment on an article
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        Ok(self.store.insert(param).await?)
    }

    /// Gets one page of an article's comments, oldest first
    ///
    /// The page cursor is the id of the last comment on the page, or None
    /// when the page came back empty.
    pub async fn list(
        &self,
        article_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<CommentPage, AppError> {
        let comments = self.store.list_after(article_id, cursor, limit).await?;
        let next_cursor = comments.last().map(|comment| comment.id);

        Ok(CommentPage {
            comments,
            next_cursor,
        })
    }

    /// Edits a comment's content on behalf of its author
    /// Returns NotFound for missing or deleted comments and Forbidden for other authors
    pub async fn update(&self, param: UpdateCommentParam) -> Result<Comment, AppError> {
        let comment = self
            .store
            .find_by_id(param.comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.is_deleted() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        if comment.user_id != param.user_id {
            return Err(AppError::Forbidden(
                "Comment belongs to another user".to_string(),
            ));
        }

        self.store
            .update_content(param.comment_id, param.content)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Deletes a comment on behalf of its author
    ///
    /// A comment with live replies is soft-deleted so the thread under it
    /// keeps its place; one without replies is removed outright.
    pub async fn delete(&self, comment_id: i64, user_id: i64) -> Result<(), AppError> {
        let comment = self
            .store
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.is_deleted() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        if comment.user_id != user_id {
            return Err(AppError::Forbidden(
                "Comment belongs to another user".to_string(),
            ));
        }

        let removed = if comment.reply_count <= 0 {
            self.store.hard_delete(comment_id).await?
        } else {
            self.store.soft_delete(comment_id).await?
        };

        // The row can vanish between the ownership check and the delete
        if !removed {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(())
    }
}
