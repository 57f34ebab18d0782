//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

use crate::server::error::AppError;

pub mod bookmark;
pub mod comment;
pub mod reply;

/// Maximum accepted length for comment and reply bodies, in characters.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Validates user-submitted body text for comments and replies.
///
/// # Arguments
/// - `content` - The body text to validate
///
/// # Returns
/// - `Ok(())` - Content length is within bounds
/// - `Err(AppError::BadRequest)` - Content is empty or exceeds [`MAX_CONTENT_CHARS`]
pub(crate) fn validate_content(content: &str) -> Result<(), AppError> {
    if content.is_empty() {
        return Err(AppError::BadRequest("Content must not be empty".to_string()));
    }

    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(AppError::BadRequest(format!(
            "Content must not exceed {MAX_CONTENT_CHARS} characters"
        )));
    }

    Ok(())
}
