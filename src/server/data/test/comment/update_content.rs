use super::*;

/// Tests updating a comment's content.
///
/// Verifies that the new content is stored and the update timestamp moves
/// forward.
///
/// Expected: Ok(Some) with updated content
#[tokio::test]
async fn updates_content_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_content(created.id, "Edited".to_string())
        .await?;

    assert!(updated.is_some());
    let comment = updated.unwrap();
    assert_eq!(comment.content, "Edited");
    assert!(comment.updated_at >= created.updated_at);

    // Verify the new content was persisted
    let db_comment = entity::prelude::Comment::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.content, "Edited");

    Ok(())
}

/// Tests updating a comment that does not exist.
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
    let updated = repo.update_content(9999, "Edited".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that updating content touches nothing else.
///
/// Verifies that ownership, placement, counters, and the creation
/// timestamp survive the edit.
///
/// Expected: Ok(Some) with only content and updated_at changed
#[tokio::test]
async fn leaves_other_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .update_content(created.id, "Edited".to_string())
        .await?
        .unwrap();

    assert_eq!(comment.article_id, created.article_id);
    assert_eq!(comment.user_id, created.user_id);
    assert_eq!(comment.reply_count, created.reply_count);
    assert_eq!(comment.created_at, created.created_at);
    assert!(!comment.is_deleted());

    Ok(())
}

/// Tests updating the content of a soft-deleted comment.
///
/// The repository itself does not check the deletion mark; refusing edits
/// on deleted comments is handled at the service layer.
///
/// Expected: Ok(Some) with updated content
#[tokio::test]
async fn updates_soft_deleted_comment_content() -> Result<(), DbErr> {
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
    let updated = repo
        .update_content(created.id, "Edited".to_string())
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().content, "Edited");

    Ok(())
}
