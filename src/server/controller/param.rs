//! Shared query parameter types for controllers.

use serde::Deserialize;

/// Cursor pagination parameters shared by comment and reply listings.
#[derive(Deserialize)]
pub struct CursorParam {
    /// Last id the caller has seen; listing resumes strictly after it.
    pub cursor: Option<i64>,
    /// Maximum number of rows per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Identifies the requesting user on endpoints without a request body.
#[derive(Deserialize)]
pub struct CallerParam {
    pub user_id: i64,
}
