use super::*;

/// Tests bookmarking an article.
///
/// Verifies that the service creates the bookmark and returns it with its
/// generated id.
///
/// Expected: Ok with bookmark created
#[tokio::test]
async fn creates_bookmark() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookmarkService::new(db);
    let bookmark = service
        .create(CreateBookmarkParam {
            user_id: 1,
            article_id: 100,
        })
        .await?;

    assert!(bookmark.id > 0);
    assert_eq!(bookmark.user_id, 1);
    assert_eq!(bookmark.article_id, 100);

    Ok(())
}

/// Tests bookmarking the same article twice.
///
/// Verifies that the second attempt is rejected as a conflict and no
/// second row is created.
///
/// Expected: Err(Conflict) with one bookmark in the table
#[tokio::test]
async fn rejects_duplicate_with_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookmarkService::new(db);
    service
        .create(CreateBookmarkParam {
            user_id: 1,
            article_id: 100,
        })
        .await?;

    let err = service
        .create(CreateBookmarkParam {
            user_id: 1,
            article_id: 100,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests the service against a store with no database behind it.
///
/// Verifies that the conflict rule comes from the storage trait contract
/// alone, so any store reporting a duplicate produces the same error.
///
/// Expected: Ok then Err(Conflict)
#[tokio::test]
async fn reports_conflict_through_any_store() -> Result<(), AppError> {
    let service = BookmarkService::with_store(InMemoryBookmarkStore::new());

    let bookmark = service
        .create(CreateBookmarkParam {
            user_id: 1,
            article_id: 100,
        })
        .await?;
    assert_eq!(bookmark.user_id, 1);

    let err = service
        .create(CreateBookmarkParam {
            user_id: 1,
            article_id: 100,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
