use super::*;

/// Tests getting a comment by its id.
///
/// Verifies that a previously created comment can be fetched and all
/// fields round-trip.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn gets_comment_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let comment = found.unwrap();
    assert_eq!(comment.id, created.id);
    assert_eq!(comment.article_id, 100);
    assert_eq!(comment.user_id, 1);
    assert_eq!(comment.content, created.content);

    Ok(())
}

/// Tests getting a comment by an id that does not exist.
///
/// Verifies that the repository reports absence rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests getting a soft-deleted comment by its id.
///
/// Verifies that the lookup does not filter on the deletion mark, so
/// callers can inspect the deletion state themselves.
///
/// Expected: Ok(Some) with the deletion mark set
#[tokio::test]
async fn includes_soft_deleted_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::comment::CommentFactory::new(db)
        .soft_deleted()
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert!(found.unwrap().is_deleted());

    Ok(())
}
