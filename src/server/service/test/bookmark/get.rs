use super::*;

/// Tests looking up the bookmark a user holds on an article.
///
/// Verifies that the bookmark covering the pair is returned.
///
/// Expected: Ok(Some) with the bookmark
#[tokio::test]
async fn reports_bookmark_for_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_bookmark(db, 1, 100).await?;

    let service = BookmarkService::new(db);
    let bookmark = service.get(1, 100).await?;

    assert!(bookmark.is_some());
    assert_eq!(bookmark.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up a pair the user never bookmarked.
///
/// Verifies that absence reads as `None`, not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn reports_none_when_not_bookmarked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bookmark(db, 2, 100).await?;

    let service = BookmarkService::new(db);
    let bookmark = service.get(1, 100).await?;

    assert!(bookmark.is_none());

    Ok(())
}
