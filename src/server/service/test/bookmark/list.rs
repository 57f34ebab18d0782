use super::*;

/// Tests listing a user's bookmarks.
///
/// Verifies that only the requesting user's bookmarks come back.
///
/// Expected: Ok with the user's two bookmarks
#[tokio::test]
async fn lists_user_bookmarks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bookmark(db, 1, 100).await?;
    factory::create_bookmark(db, 1, 200).await?;
    factory::create_bookmark(db, 2, 100).await?;

    let service = BookmarkService::new(db);
    let bookmarks = service.list(1).await?;

    assert_eq!(bookmarks.len(), 2);
    assert!(bookmarks.iter().all(|bookmark| bookmark.user_id == 1));

    Ok(())
}

/// Tests listing bookmarks for a user who has none.
///
/// Verifies that the service returns an empty list rather than an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_bookmarks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookmarkService::new(db);
    let bookmarks = service.list(1).await?;

    assert!(bookmarks.is_empty());

    Ok(())
}
