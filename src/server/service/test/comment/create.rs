use super::*;

/// Tests posting a comment on an article.
///
/// Verifies that the comment is stored with the submitted content and
/// starts with no replies and no deletion mark.
///
/// Expected: Ok with comment created
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CommentService::new(db);
    let comment = service
        .create(CreateCommentParam {
            article_id: 100,
            user_id: 1,
            content: "Great article".to_string(),
        })
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.article_id, 100);
    assert_eq!(comment.user_id, 1);
    assert_eq!(comment.content, "Great article");
    assert_eq!(comment.reply_count, 0);
    assert!(!comment.is_deleted());

    Ok(())
}
