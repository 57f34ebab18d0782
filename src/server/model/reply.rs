//! Domain models for reply data operations.

use chrono::{DateTime, Utc};

use crate::{
    model::reply::{CreateReplyDto, ReplyDto, ReplyPageDto, UpdateReplyDto},
    server::{error::AppError, model::validate_content},
};

/// A reply beneath a comment. Replies are never soft-deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Unique identifier for the reply.
    pub id: i64,
    /// ID of the comment the reply belongs to.
    pub comment_id: i64,
    /// ID of the user that wrote the reply.
    pub user_id: i64,
    /// Reply body text.
    pub content: String,
    /// Timestamp when the reply was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last content update.
    pub updated_at: DateTime<Utc>,
}

impl Reply {
    /// Converts an entity model to a reply domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Reply` - The converted reply domain model
    pub fn from_entity(entity: entity::reply::Model) -> Self {
        Self {
            id: entity.id,
            comment_id: entity.comment_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the reply to a DTO for API responses.
    ///
    /// # Returns
    /// - `ReplyDto` - The converted reply DTO
    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            comment_id: self.comment_id,
            user_id: self.user_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One page of replies from cursor pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPage {
    /// Replies on the page, ordered ascending by id.
    pub replies: Vec<Reply>,
    /// Cursor to pass to the next call, or `None` when the page was empty.
    pub next_cursor: Option<i64>,
}

impl ReplyPage {
    /// Converts the page to a DTO for API responses.
    ///
    /// # Returns
    /// - `ReplyPageDto` - The converted page DTO
    pub fn into_dto(self) -> ReplyPageDto {
        ReplyPageDto {
            replies: self.replies.into_iter().map(Reply::into_dto).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Parameters for creating a new reply.
#[derive(Debug, Clone)]
pub struct CreateReplyParam {
    /// ID of the comment being replied to.
    pub comment_id: i64,
    /// ID of the user writing the reply.
    pub user_id: i64,
    /// Reply body text.
    pub content: String,
}

impl CreateReplyParam {
    /// Builds creation parameters from the request path and body, validating content.
    ///
    /// # Arguments
    /// - `comment_id` - Parent comment taken from the request path
    /// - `dto` - Request body carrying the author and content
    ///
    /// # Returns
    /// - `Ok(CreateReplyParam)` - Validated parameters for the reply service
    /// - `Err(AppError::BadRequest)` - Content empty or longer than the allowed maximum
    pub fn from_dto(comment_id: i64, dto: CreateReplyDto) -> Result<Self, AppError> {
        validate_content(&dto.content)?;

        Ok(Self {
            comment_id,
            user_id: dto.user_id,
            content: dto.content,
        })
    }
}

/// Parameters for updating an existing reply.
#[derive(Debug, Clone)]
pub struct UpdateReplyParam {
    /// ID of the reply to update.
    pub reply_id: i64,
    /// ID of the user requesting the update; must own the reply.
    pub user_id: i64,
    /// Replacement body text.
    pub content: String,
}

impl UpdateReplyParam {
    /// Builds update parameters from the request path and body, validating content.
    ///
    /// # Arguments
    /// - `reply_id` - Reply taken from the request path
    /// - `dto` - Request body carrying the caller and replacement content
    ///
    /// # Returns
    /// - `Ok(UpdateReplyParam)` - Validated parameters for the reply service
    /// - `Err(AppError::BadRequest)` - Content empty or longer than the allowed maximum
    pub fn from_dto(reply_id: i64, dto: UpdateReplyDto) -> Result<Self, AppError> {
        validate_content(&dto.content)?;

        Ok(Self {
            reply_id,
            user_id: dto.user_id,
            content: dto.content,
        })
    }
}
