use super::*;

/// Tests fetching a comment by ID.
///
/// Expected: Ok with matching fields and composed author
#[tokio::test]
async fn returns_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let seeded = factory::comment::create_comment(db, article.id, author.id).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.get_comment_by_id(seeded.id).await;

    assert!(result.is_ok());
    let comment = result.unwrap();
    assert_eq!(comment.id, seeded.id);
    assert_eq!(comment.body, seeded.body);
    assert_eq!(comment.author.id, author.id);

    Ok(())
}

/// Tests fetching a nonexistent comment.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let result = repo.get_comment_by_id(999999).await;

    assert!(matches!(result, Err(DataError::NotFound(_))));

    Ok(())
}
