use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentPageDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        controller::param::{CallerParam, CursorParam},
        error::AppError,
        model::comment::{CreateCommentParam, UpdateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Post a comment on an article.
///
/// Creates a comment with the submitted content on behalf of the user named
/// in the request body. Content must be between 1 and 1000 characters.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article ID to comment on
/// - `payload` - Comment creation data (author and content)
///
/// # Returns
/// - `201 Created` - Successfully created comment
/// - `400 Bad Request` - Content empty or longer than 1000 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i64, Path, description = "Article ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment content", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCommentParam::from_dto(article_id, payload)?;
    let comment = CommentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get one page of an article's comments.
///
/// Returns comments on the article ordered by id ascending, starting
/// strictly after the given cursor. Soft-deleted comments stay in the page
/// as placeholders with author and content set to null. The response carries
/// the id of the last comment as `next_cursor`, or null when the page is
/// empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article ID whose comments to fetch
/// - `param` - Cursor and page size (limit defaults to 10)
///
/// # Returns
/// - `200 OK` - One page of comments and the next cursor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i64, Path, description = "Article ID"),
        ("cursor" = Option<i64>, Query, description = "Return comments with id greater than this"),
        ("limit" = Option<u64>, Query, description = "Maximum comments per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    Query(param): Query<CursorParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = CommentService::new(&state.db)
        .list(article_id, param.cursor, param.limit)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Edit a comment.
///
/// Replaces the comment's content on behalf of its author. Soft-deleted
/// comments cannot be edited and read as missing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Comment ID to edit
/// - `payload` - Update data (caller and replacement content)
///
/// # Returns
/// - `200 OK` - Successfully updated comment
/// - `400 Bad Request` - Content empty or longer than 1000 characters
/// - `403 Forbidden` - The comment belongs to another user
/// - `404 Not Found` - No live comment with this ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment content", body = ErrorDto),
        (status = 403, description = "The comment belongs to another user", body = ErrorDto),
        (status = 404, description = "No live comment with this ID exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCommentParam::from_dto(comment_id, payload)?;
    let comment = CommentService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// Deletes the comment on behalf of its author. A comment that still has
/// replies is soft-deleted and keeps its place in listings as a masked
/// placeholder; a comment without replies is removed outright.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Comment ID to delete
/// - `param` - The requesting user
///
/// # Returns
/// - `204 No Content` - Successfully deleted comment
/// - `403 Forbidden` - The comment belongs to another user
/// - `404 Not Found` - No live comment with this ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i64, Path, description = "Comment ID"),
        ("user_id" = i64, Query, description = "ID of the requesting user")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 403, description = "The comment belongs to another user", body = ErrorDto),
        (status = 404, description = "No live comment with this ID exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Query(param): Query<CallerParam>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db)
        .delete(comment_id, param.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
