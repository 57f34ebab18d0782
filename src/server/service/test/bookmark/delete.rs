use super::*;

/// Tests removing a bookmark as its owner.
///
/// Verifies that the row is deleted.
///
/// Expected: Ok with bookmark removed
#[tokio::test]
async fn deletes_own_bookmark() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_bookmark(db, 1, 100).await?;

    let service = BookmarkService::new(db);
    service.delete(created.id, 1).await?;

    let db_bookmark = entity::prelude::Bookmark::find_by_id(created.id)
        .one(db)
        .await
        .unwrap();
    assert!(db_bookmark.is_none());

    Ok(())
}

/// Tests removing a bookmark that does not exist.
///
/// Verifies that absence is reported before any ownership check, so the
/// caller's identity never turns a missing bookmark into Forbidden.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_bookmark() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookmarkService::new(db);
    let err = service.delete(9999, 1).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests removing a bookmark owned by another user.
///
/// Verifies that the delete is refused and the row survives.
///
/// Expected: Err(Forbidden) with bookmark still present
#[tokio::test]
async fn fails_for_foreign_bookmark() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_bookmark(db, 1, 100).await?;

    let service = BookmarkService::new(db);
    let err = service.delete(created.id, 2).await.unwrap_err();

    assert!(matches!(err, AppError::Forbidden(_)));

    let db_bookmark = entity::prelude::Bookmark::find_by_id(created.id)
        .one(db)
        .await
        .unwrap();
    assert!(db_bookmark.is_some());

    Ok(())
}
