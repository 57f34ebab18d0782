//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each repository implements a storage trait (`BookmarkStore`, `CommentStore`, `ReplyStore`)
//! so the service layer depends on the trait rather than the concrete SeaORM implementation
//! and can be exercised against an in-memory fake in tests.

pub mod bookmark;
pub mod comment;
pub mod reply;
