use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reply::{CreateReplyDto, ReplyDto, ReplyPageDto, UpdateReplyDto},
    },
    server::{
        controller::param::{CallerParam, CursorParam},
        error::AppError,
        model::reply::{CreateReplyParam, UpdateReplyParam},
        service::reply::ReplyService,
        state::AppState,
    },
};

/// Tag for grouping reply endpoints in OpenAPI documentation
pub static REPLY_TAG: &str = "reply";

/// Post a reply under a comment.
///
/// Creates a reply on behalf of the user named in the request body. The
/// parent comment must exist and not be soft-deleted; content must be
/// between 1 and 1000 characters.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Comment ID to reply to
/// - `payload` - Reply creation data (author and content)
///
/// # Returns
/// - `201 Created` - Successfully created reply
/// - `400 Bad Request` - Content empty or longer than 1000 characters
/// - `404 Not Found` - Parent comment missing or soft-deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{comment_id}/replies",
    tag = REPLY_TAG,
    params(
        ("comment_id" = i64, Path, description = "Parent comment ID")
    ),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Successfully created reply", body = ReplyDto),
        (status = 400, description = "Invalid reply content", body = ErrorDto),
        (status = 404, description = "Parent comment missing or soft-deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateReplyParam::from_dto(comment_id, payload)?;
    let reply = ReplyService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

/// Get one page of a comment's replies.
///
/// Returns replies under the comment ordered by id ascending, starting
/// strictly after the given cursor. The response carries the id of the last
/// reply as `next_cursor`, or null when the page is empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Comment ID whose replies to fetch
/// - `param` - Cursor and page size (limit defaults to 10)
///
/// # Returns
/// - `200 OK` - One page of replies and the next cursor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comments/{comment_id}/replies",
    tag = REPLY_TAG,
    params(
        ("comment_id" = i64, Path, description = "Parent comment ID"),
        ("cursor" = Option<i64>, Query, description = "Return replies with id greater than this"),
        ("limit" = Option<u64>, Query, description = "Maximum replies per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved replies", body = ReplyPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_replies(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Query(param): Query<CursorParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ReplyService::new(&state.db)
        .list(comment_id, param.cursor, param.limit)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Edit a reply.
///
/// Replaces the reply's content on behalf of its author.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `reply_id` - Reply ID to edit
/// - `payload` - Update data (caller and replacement content)
///
/// # Returns
/// - `200 OK` - Successfully updated reply
/// - `400 Bad Request` - Content empty or longer than 1000 characters
/// - `403 Forbidden` - The reply belongs to another user
/// - `404 Not Found` - No reply with this ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/replies/{reply_id}",
    tag = REPLY_TAG,
    params(
        ("reply_id" = i64, Path, description = "Reply ID")
    ),
    request_body = UpdateReplyDto,
    responses(
        (status = 200, description = "Successfully updated reply", body = ReplyDto),
        (status = 400, description = "Invalid reply content", body = ErrorDto),
        (status = 403, description = "The reply belongs to another user", body = ErrorDto),
        (status = 404, description = "No reply with this ID exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reply(
    State(state): State<AppState>,
    Path(reply_id): Path<i64>,
    Json(payload): Json<UpdateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateReplyParam::from_dto(reply_id, payload)?;
    let reply = ReplyService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(reply.into_dto())))
}

/// Delete a reply.
///
/// Deletes the reply on behalf of its author and decrements the parent
/// comment's reply counter. Removing the last reply of a soft-deleted
/// comment also purges the comment itself.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `reply_id` - Reply ID to delete
/// - `param` - The requesting user
///
/// # Returns
/// - `204 No Content` - Successfully deleted reply
/// - `403 Forbidden` - The reply belongs to another user
/// - `404 Not Found` - No reply with this ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/replies/{reply_id}",
    tag = REPLY_TAG,
    params(
        ("reply_id" = i64, Path, description = "Reply ID"),
        ("user_id" = i64, Query, description = "ID of the requesting user")
    ),
    responses(
        (status = 204, description = "Successfully deleted reply"),
        (status = 403, description = "The reply belongs to another user", body = ErrorDto),
        (status = 404, description = "No reply with this ID exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reply(
    State(state): State<AppState>,
    Path(reply_id): Path<i64>,
    Query(param): Query<CallerParam>,
) -> Result<impl IntoResponse, AppError> {
    ReplyService::new(&state.db)
        .delete(reply_id, param.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
