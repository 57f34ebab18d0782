use sea_orm::DatabaseConnection;

use crate::server::{
    data::bookmark::{BookmarkRepository, BookmarkStore},
    error::AppError,
    model::bookmark::{Bookmark, CreateBookmarkParam},
};

pub struct BookmarkService<S> {
    store: S,
}

impl<'a> BookmarkService<BookmarkRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: BookmarkRepository::new(db),
        }
    }
}

impl<S: BookmarkStore> BookmarkService<S> {
    /// Creates a service on top of any bookmark store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Bookmarks an article for a user
    /// Returns Conflict if the user already bookmarked the article
    pub async fn create(&self, param: CreateBookmarkParam) -> Result<Bookmark, AppError> {
        self.store
            .insert(param)
            .await?
            .ok_or_else(|| AppError::Conflict("Article is already bookmarked".to_string()))
    }

    /// Gets all bookmarks held by a user
    pub async fn list(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.store.find_by_user(user_id).await?)
    }

    /// Gets the bookmark a user holds on an article, if any
    pub async fn get(&self, user_id: i64, article_id: i64) -> Result<Option<Bookmark>, AppError> {
        Ok(self
            .store
            .find_by_user_and_article(user_id, article_id)
            .await?)
    }

    /// Removes a bookmark
    /// Returns NotFound if the bookmark does not exist and Forbidden if another user owns it
    pub async fn delete(&self, bookmark_id: i64, user_id: i64) -> Result<(), AppError> {
        let bookmark = self
            .store
            .find_by_id(bookmark_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bookmark not found".to_string()))?;

        if bookmark.user_id != user_id {
            return Err(AppError::Forbidden(
                "Bookmark belongs to another user".to_string(),
            ));
        }

        // The row can vanish between the ownership check and the delete
        if !self.store.delete(bookmark_id).await? {
            return Err(AppError::NotFound("Bookmark not found".to_string()));
        }

        Ok(())
    }
}
