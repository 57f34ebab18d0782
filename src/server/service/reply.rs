use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comment::{CommentRepository, CommentStore},
        reply::{ReplyRepository, ReplyStore},
    },
    error::AppError,
    model::reply::{CreateReplyParam, Reply, ReplyPage, UpdateReplyParam},
};

pub struct ReplyService<C, R> {
    comments: C,
    replies: R,
}

impl<'a> ReplyService<CommentRepository<'a>, ReplyRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            comments: CommentRepository::new(db),
            replies: ReplyRepository::new(db),
        }
    }
}

impl<C: CommentStore, R: ReplyStore> ReplyService<C, R> {
    /// Creates a service on top of any comment and reply stores
    pub fn with_stores(comments: C, replies: R) -> Self {
        Self { comments, replies }
    }

    /// Posts a reply under a comment
    /// Returns NotFound if the comment is missing or soft-deleted
    pub async fn create(&self, param: CreateReplyParam) -> Result<Reply, AppError> {
        let comment = self
            .comments
            .find_by_id(param.comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.is_deleted() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(self.replies.insert(param).await?)
    }

    /// Gets one page of a comment's replies, oldest first
    ///
    /// The page cursor is the id of the last reply on the page, or None
    /// when the page came back empty.
    pub async fn list(
        &self,
        comment_id: i64,
        cursor: Option<i64>,
        limit: u64,
    ) -> Result<ReplyPage, AppError> {
        let replies = self.replies.list_after(comment_id, cursor, limit).await?;
        let next_cursor = replies.last().map(|reply| reply.id);

        Ok(ReplyPage {
            replies,
            next_cursor,
        })
    }

    /// Edits a reply's content on behalf of its author
    /// Returns NotFound for missing replies and Forbidden for other authors
    pub async fn update(&self, param: UpdateReplyParam) -> Result<Reply, AppError> {
        let reply = self
            .replies
            .find_by_id(param.reply_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;

        if reply.user_id != param.user_id {
            return Err(AppError::Forbidden(
                "Reply belongs to another user".to_string(),
            ));
        }

        self.replies
            .update_content(param.reply_id, param.content)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))
    }

    /// Deletes a reply on behalf of its author
    ///
    /// Removing the last reply of a soft-deleted comment also purges the
    /// comment itself.
    pub async fn delete(&self, reply_id: i64, user_id: i64) -> Result<(), AppError> {
        let reply = self
            .replies
            .find_by_id(reply_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;

        if reply.user_id != user_id {
            return Err(AppError::Forbidden(
                "Reply belongs to another user".to_string(),
            ));
        }

        // The row can vanish between the ownership check and the delete
        if !self.replies.delete_cascading(reply_id).await? {
            return Err(AppError::NotFound("Reply not found".to_string()));
        }

        Ok(())
    }
}
