use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        bookmark::{self, BOOKMARK_TAG},
        comment::{self, COMMENT_TAG},
        reply::{self, REPLY_TAG},
    },
    state::AppState,
};

/// OpenAPI document metadata for the HTTP API.
///
/// Paths and schemas are collected by the router below, so this only carries
/// the document info and tag descriptions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Subcontents API",
        description = "Bookmark, comment, and reply services for articles"
    ),
    tags(
        (name = BOOKMARK_TAG, description = "Article bookmark management"),
        (name = COMMENT_TAG, description = "Comment threads on articles"),
        (name = REPLY_TAG, description = "Replies under comments")
    )
)]
struct ApiDoc;

/// Builds the application router with all API routes registered.
///
/// Handlers are registered through `OpenApiRouter` so the OpenAPI document is
/// assembled from the same `#[utoipa::path]` annotations that define the
/// routes. Swagger UI is served at `/api-docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(bookmark::create_bookmark))
        .routes(routes!(bookmark::get_bookmarks))
        .routes(routes!(bookmark::get_bookmark_status))
        .routes(routes!(bookmark::delete_bookmark))
        .routes(routes!(comment::create_comment, comment::get_comments))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(reply::create_reply, reply::get_replies))
        .routes(routes!(reply::update_reply, reply::delete_reply))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
}
