use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bookmark::{BookmarkDto, BookmarkStatusDto, CreateBookmarkDto},
    },
    server::{
        controller::param::CallerParam, error::AppError, model::bookmark::CreateBookmarkParam,
        service::bookmark::BookmarkService, state::AppState,
    },
};

/// Tag for grouping bookmark endpoints in OpenAPI documentation
pub static BOOKMARK_TAG: &str = "bookmark";

/// Bookmark an article.
///
/// Creates a bookmark on the specified article for the user named in the
/// request body. A user can bookmark an article at most once; repeating the
/// request is rejected as a conflict.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article ID to bookmark
/// - `payload` - Bookmark creation data (the requesting user)
///
/// # Returns
/// - `201 Created` - Successfully created bookmark
/// - `409 Conflict` - The user already bookmarked this article
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/bookmarks",
    tag = BOOKMARK_TAG,
    params(
        ("article_id" = i64, Path, description = "Article ID")
    ),
    request_body = CreateBookmarkDto,
    responses(
        (status = 201, description = "Successfully created bookmark", body = BookmarkDto),
        (status = 409, description = "The user already bookmarked this article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    Json(payload): Json<CreateBookmarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateBookmarkParam::from_dto(article_id, payload);
    let bookmark = BookmarkService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(bookmark.into_dto())))
}

/// Get all bookmarks for a user.
///
/// Returns every bookmark the specified user holds, in storage order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - User ID whose bookmarks to fetch
///
/// # Returns
/// - `200 OK` - List of the user's bookmarks, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/bookmarks",
    tag = BOOKMARK_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookmarks", body = Vec<BookmarkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookmarks(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let bookmarks = BookmarkService::new(&state.db).list(user_id).await?;

    let dtos: Vec<BookmarkDto> = bookmarks.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Check whether a user has bookmarked an article.
///
/// Answers the "is this bookmarked" question for one user and article pair.
/// A pair without a bookmark is a normal answer, not an error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - User ID to check for
/// - `article_id` - Article ID to check
///
/// # Returns
/// - `200 OK` - Bookmark status, including the bookmark when present
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/articles/{article_id}/bookmark",
    tag = BOOKMARK_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("article_id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookmark status", body = BookmarkStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookmark_status(
    State(state): State<AppState>,
    Path((user_id, article_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = BookmarkService::new(&state.db)
        .get(user_id, article_id)
        .await?;

    let status = BookmarkStatusDto {
        bookmarked: bookmark.is_some(),
        bookmark: bookmark.map(|b| b.into_dto()),
    };

    Ok((StatusCode::OK, Json(status)))
}

/// Remove a bookmark.
///
/// Deletes the specified bookmark on behalf of the requesting user. The
/// bookmark must exist and belong to that user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `bookmark_id` - Bookmark ID to delete
/// - `param` - The requesting user
///
/// # Returns
/// - `204 No Content` - Successfully deleted bookmark
/// - `403 Forbidden` - The bookmark belongs to another user
/// - `404 Not Found` - No bookmark with this ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/bookmarks/{bookmark_id}",
    tag = BOOKMARK_TAG,
    params(
        ("bookmark_id" = i64, Path, description = "Bookmark ID"),
        ("user_id" = i64, Query, description = "ID of the requesting user")
    ),
    responses(
        (status = 204, description = "Successfully deleted bookmark"),
        (status = 403, description = "The bookmark belongs to another user", body = ErrorDto),
        (status = 404, description = "No bookmark with this ID exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(bookmark_id): Path<i64>,
    Query(param): Query<CallerParam>,
) -> Result<impl IntoResponse, AppError> {
    BookmarkService::new(&state.db)
        .delete(bookmark_id, param.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
