pub use super::bookmark::Entity as Bookmark;
pub use super::comment::Entity as Comment;
pub use super::reply::Entity as Reply;
