//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let bookmark = factory::bookmark::create_bookmark(&db, 1, 100).await?;
//!     let comment = factory::comment::create_comment(&db, 100, 1).await?;
//!
//!     // Create a comment together with live replies (reply_count kept in sync)
//!     let (comment, replies) = factory::helpers::create_comment_with_replies(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let comment = factory::comment::CommentFactory::new(&db)
//!     .article_id(100)
//!     .user_id(7)
//!     .content("Custom content")
//!     .soft_deleted()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `bookmark` - Create bookmark entities
//! - `comment` - Create comment entities (including soft-deleted ones)
//! - `reply` - Create reply entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod bookmark;
pub mod comment;
pub mod helpers;
pub mod reply;

// Re-export commonly used factory functions for concise usage
pub use bookmark::create_bookmark;
pub use comment::create_comment;
pub use reply::create_reply;
