use super::*;

/// Tests paging through a comment's replies with a cursor.
///
/// Verifies that each page picks up strictly after the cursor in id order
/// and that paging past the last reply yields an empty page.
///
/// Expected: Ok with two full pages followed by an empty one
#[tokio::test]
async fn pages_through_replies_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (comment, replies) = factory::helpers::create_comment_with_replies(db, 4).await?;

    let repo = ReplyRepository::new(db);

    let first_page = repo.list_after(comment.id, None, 2).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].id, replies[0].id);
    assert_eq!(first_page[1].id, replies[1].id);

    let second_page = repo.list_after(comment.id, Some(replies[1].id), 2).await?;
    assert_eq!(second_page.len(), 2);
    assert_eq!(second_page[0].id, replies[2].id);
    assert_eq!(second_page[1].id, replies[3].id);

    let third_page = repo.list_after(comment.id, Some(replies[3].id), 2).await?;
    assert!(third_page.is_empty());

    Ok(())
}

/// Tests that listing is scoped to one comment.
///
/// Verifies that replies under other comments never leak into the page.
///
/// Expected: Ok with only the requested comment's replies
#[tokio::test]
async fn excludes_other_comments_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (ours, our_replies) = factory::helpers::create_comment_with_replies(db, 1).await?;
    factory::helpers::create_comment_with_replies(db, 2).await?;

    let repo = ReplyRepository::new(db);
    let page = repo.list_after(ours.id, None, 10).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, our_replies[0].id);

    Ok(())
}

/// Tests listing replies for a comment that has none.
///
/// Verifies that an unknown or empty comment yields an empty page rather
/// than an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_comment_without_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let comment = factory::create_comment(db, 100, 1).await?;

    let repo = ReplyRepository::new(db);
    let page = repo.list_after(comment.id, None, 10).await?;

    assert!(page.is_empty());

    Ok(())
}
