use super::*;

/// Tests editing a reply as its author.
///
/// Verifies that the content is replaced and the reply comes back with
/// the new text.
///
/// Expected: Ok with updated content
#[tokio::test]
async fn updates_own_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_comment, replies) = factory::helpers::create_comment_with_replies(db, 1).await?;

    let service = ReplyService::new(db);
    let updated = service
        .update(UpdateReplyParam {
            reply_id: replies[0].id,
            user_id: replies[0].user_id,
            content: "Edited".to_string(),
        })
        .await?;

    assert_eq!(updated.id, replies[0].id);
    assert_eq!(updated.content, "Edited");

    Ok(())
}

/// Tests editing a reply that does not exist.
///
/// Verifies that the edit is rejected as missing.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReplyService::new(db);
    let err = service
        .update(UpdateReplyParam {
            reply_id: 9999,
            user_id: 1,
            content: "Edited".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests editing a reply written by another user.
///
/// Verifies that the edit is refused and the stored content survives.
///
/// Expected: Err(Forbidden) with content unchanged
#[tokio::test]
async fn fails_for_foreign_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subcontent_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_comment, replies) = factory::helpers::create_comment_with_replies(db, 1).await?;

    let service = ReplyService::new(db);
    let err = service
        .update(UpdateReplyParam {
            reply_id: replies[0].id,
            user_id: replies[0].user_id + 1,
            content: "Hijacked".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Forbidden(_)));

    let db_reply = entity::prelude::Reply::find_by_id(replies[0].id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(db_reply.content, replies[0].content);

    Ok(())
}
