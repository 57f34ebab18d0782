use super::*;

/// Tests hard-deleting a comment.
///
/// Verifies that the row is removed from the table entirely.
///
/// Expected: Ok(true) with comment removed
#[tokio::test]
async fn removes_comment_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.hard_delete(created.id).await?;

    assert!(deleted);

    let db_comment = entity::prelude::Comment::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_comment.is_none());

    Ok(())
}

/// Tests hard-deleting a comment that does not exist.
///
/// Verifies that the repository reports that no row was removed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let deleted = repo.hard_delete(9999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests hard deletion of a comment that still has replies.
///
/// Verifies that the foreign key cascades, so no reply rows are left
/// pointing at a missing comment.
///
/// Expected: Ok(true) with replies removed
#[tokio::test]
async fn cascades_to_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, _replies) = factory::helpers::create_comment_with_replies(db, 2).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.hard_delete(comment.id).await?;

    assert!(deleted);

    let remaining = entity::prelude::Reply::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}
