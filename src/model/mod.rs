//! Wire-format DTOs exchanged with API clients and described in the OpenAPI spec.

pub mod api;
pub mod bookmark;
pub mod comment;
pub mod reply;
