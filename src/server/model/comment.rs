//! Domain models for comment data operations.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentPageDto, CreateCommentDto, UpdateCommentDto},
    server::{error::AppError, model::validate_content},
};

/// A comment on an article, including its soft-delete state.
///
/// `deleted_at` set means the comment was deleted while replies still
/// referenced it; such a comment stays listable as a placeholder but its
/// author and content are masked in API responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Unique identifier for the comment.
    pub id: i64,
    /// ID of the article the comment was posted on.
    pub article_id: i64,
    /// ID of the user that wrote the comment.
    pub user_id: i64,
    /// Comment body text.
    pub content: String,
    /// Denormalized count of live replies referencing this comment.
    pub reply_count: i64,
    /// Timestamp when the comment was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last content update.
    pub updated_at: DateTime<Utc>,
    /// Timestamp of the soft delete, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Comment` - The converted comment domain model
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            user_id: entity.user_id,
            content: entity.content,
            reply_count: entity.reply_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    /// Whether the comment has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Converts the comment to a DTO for API responses.
    ///
    /// Soft-deleted comments keep their id, reply count, and timestamps so
    /// reply threads stay navigable, but author and content are replaced
    /// with null.
    ///
    /// # Returns
    /// - `CommentDto` - The converted comment DTO, masked if soft-deleted
    pub fn into_dto(self) -> CommentDto {
        let deleted = self.deleted_at.is_some();

        CommentDto {
            id: self.id,
            article_id: self.article_id,
            author_id: (!deleted).then_some(self.user_id),
            content: (!deleted).then_some(self.content),
            reply_count: self.reply_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One page of comments from cursor pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    /// Comments on the page, ordered ascending by id.
    pub comments: Vec<Comment>,
    /// Cursor to pass to the next call, or `None` when the page was empty.
    pub next_cursor: Option<i64>,
}

impl CommentPage {
    /// Converts the page to a DTO for API responses.
    ///
    /// # Returns
    /// - `CommentPageDto` - The converted page DTO with masking applied per comment
    pub fn into_dto(self) -> CommentPageDto {
        CommentPageDto {
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Parameters for creating a new comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    /// ID of the article the comment is posted on.
    pub article_id: i64,
    /// ID of the user writing the comment.
    pub user_id: i64,
    /// Comment body text.
    pub content: String,
}

impl CreateCommentParam {
    /// Builds creation parameters from the request path and body, validating content.
    ///
    /// # Arguments
    /// - `article_id` - Article taken from the request path
    /// - `dto` - Request body carrying the author and content
    ///
    /// # Returns
    /// - `Ok(CreateCommentParam)` - Validated parameters for the comment service
    /// - `Err(AppError::BadRequest)` - Content empty or longer than the allowed maximum
    pub fn from_dto(article_id: i64, dto: CreateCommentDto) -> Result<Self, AppError> {
        validate_content(&dto.content)?;

        Ok(Self {
            article_id,
            user_id: dto.user_id,
            content: dto.content,
        })
    }
}

/// Parameters for updating an existing comment.
#[derive(Debug, Clone)]
pub struct UpdateCommentParam {
    /// ID of the comment to update.
    pub comment_id: i64,
    /// ID of the user requesting the update; must own the comment.
    pub user_id: i64,
    /// Replacement body text.
    pub content: String,
}

impl UpdateCommentParam {
    /// Builds update parameters from the request path and body, validating content.
    ///
    /// # Arguments
    /// - `comment_id` - Comment taken from the request path
    /// - `dto` - Request body carrying the caller and replacement content
    ///
    /// # Returns
    /// - `Ok(UpdateCommentParam)` - Validated parameters for the comment service
    /// - `Err(AppError::BadRequest)` - Content empty or longer than the allowed maximum
    pub fn from_dto(comment_id: i64, dto: UpdateCommentDto) -> Result<Self, AppError> {
        validate_content(&dto.content)?;

        Ok(Self {
            comment_id,
            user_id: dto.user_id,
            content: dto.content,
        })
    }
}
