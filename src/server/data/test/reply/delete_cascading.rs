use super::*;

/// Tests deleting a reply from a comment with several replies.
///
/// Verifies that the reply row is removed and the parent's counter drops
/// by one.
///
/// Expected: Ok(true) with counter at 1
#[tokio::test]
async fn deletes_reply_and_decrements_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) = factory::helpers::create_comment_with_replies(db, 2).await?;

    let repo = ReplyRepository::new(db);
    let deleted = repo.delete_cascading(replies[0].id).await?;

    assert!(deleted);

    let db_reply = entity::prelude::Reply::find_by_id(replies[0].id)
        .one(db)
        .await?;
    assert!(db_reply.is_none());

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.reply_count, 1);

    Ok(())
}

/// Tests deleting a reply that does not exist.
///
/// Verifies that the repository reports that no row was removed and no
/// counter moves.
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

    let (comment, _replies) = factory::helpers::create_comment_with_replies(db, 1).await?;

    let repo = ReplyRepository::new(db);
    let deleted = repo.delete_cascading(9999).await?;

    assert!(!deleted);

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.reply_count, 1);

    Ok(())
}

/// Tests removing the last reply of a soft-deleted comment.
///
/// Verifies that once nothing references it anymore, the soft-deleted
/// parent is purged from the table in the same transaction.
///
/// Expected: Ok(true) with the parent comment gone
#[tokio::test]
async fn purges_soft_deleted_parent_with_last_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) =
        factory::helpers::create_soft_deleted_comment_with_replies(db, 1).await?;

    let repo = ReplyRepository::new(db);
    let deleted = repo.delete_cascading(replies[0].id).await?;

    assert!(deleted);

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?;
    assert!(db_comment.is_none());

    Ok(())
}

/// Tests removing one of several replies of a soft-deleted comment.
///
/// Verifies that the parent stays as long as other replies still
/// reference it.
///
/// Expected: Ok(true) with the parent still soft-deleted
#[tokio::test]
async fn keeps_soft_deleted_parent_with_remaining_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) =
        factory::helpers::create_soft_deleted_comment_with_replies(db, 2).await?;

    let repo = ReplyRepository::new(db);
    let deleted = repo.delete_cascading(replies[0].id).await?;

    assert!(deleted);

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.reply_count, 1);
    assert!(db_comment.deleted_at.is_some());

    Ok(())
}

/// Tests removing the last reply of a live comment.
///
/// Verifies that a comment nobody deleted is never purged, even when its
/// counter reaches zero.
///
/// Expected: Ok(true) with the parent still present
#[tokio::test]
async fn keeps_live_parent_at_zero_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) = factory::helpers::create_comment_with_replies(db, 1).await?;

    let repo = ReplyRepository::new(db);
    let deleted = repo.delete_cascading(replies[0].id).await?;

    assert!(deleted);

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.reply_count, 0);
    assert!(db_comment.deleted_at.is_none());

    Ok(())
}

/// Tests that the counter tracks the live reply rows across deletions.
///
/// Verifies that after each removal the stored counter equals the number
/// of reply rows that still point at the comment.
///
/// Expected: Ok with counter matching the row count after every step
#[tokio::test]
async fn keeps_counter_matching_live_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) = factory::helpers::create_comment_with_replies(db, 3).await?;

    let repo = ReplyRepository::new(db);

    for reply in replies.iter().take(2) {
        repo.delete_cascading(reply.id).await?;

        let rows = entity::prelude::Reply::find()
            .filter(entity::reply::Column::CommentId.eq(comment.id))
            .count(db)
            .await?;
        let db_comment = entity::prelude::Comment::find_by_id(comment.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(db_comment.reply_count as u64, rows);
    }

    Ok(())
}
