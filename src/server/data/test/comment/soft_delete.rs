use super::*;

/// Tests soft-deleting a live comment.
///
/// Verifies that the deletion timestamp is set while the row stays in the
/// table.
///
/// Expected: Ok(true) with deletion mark set
#[tokio::test]
async fn marks_live_comment_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    let marked = repo.soft_delete(created.id).await?;

    assert!(marked);

    let db_comment = entity::prelude::Comment::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_comment.deleted_at.is_some());

    Ok(())
}

/// Tests soft-deleting a comment that does not exist.
///
/// Verifies that the repository reports that no row was marked.
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
    let marked = repo.soft_delete(9999).await?;

    assert!(!marked);

    Ok(())
}

/// Tests soft-deleting an already soft-deleted comment.
///
/// Verifies that the mark is applied at most once, so a repeated delete
/// reads as the comment being gone.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_already_soft_deleted() -> Result<(), DbErr> {
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
    let marked = repo.soft_delete(created.id).await?;

    assert!(!marked);

    Ok(())
}

/// Tests that soft deletion keeps the stored content.
///
/// Verifies that the row's content and counters are untouched; hiding the
/// content from readers happens on the way out.
///
/// Expected: Ok(true) with content still stored
#[tokio::test]
async fn leaves_content_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_comment(db, 100, 1).await?;

    let repo = CommentRepository::new(db);
    repo.soft_delete(created.id).await?;

    let db_comment = entity::prelude::Comment::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.content, created.content);
    assert_eq!(db_comment.reply_count, created.reply_count);

    Ok(())
}
