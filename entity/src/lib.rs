//! SeaORM entities for the subcontents database schema.

pub mod prelude;

pub mod bookmark;
pub mod comment;
pub mod reply;
