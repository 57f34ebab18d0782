//! Controller layer translating HTTP requests into service calls.
//!
//! Handlers validate and convert DTOs into service params, call the matching
//! service, and convert returned domain models back into response DTOs. Every
//! handler carries a `#[utoipa::path]` annotation so the router can assemble
//! the OpenAPI document from the same source of truth.

pub mod bookmark;
pub mod comment;
pub mod param;
pub mod reply;
