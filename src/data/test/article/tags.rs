use super::*;

/// Tests listing all distinct tag names.
///
/// Two articles share one tag; the shared name must appear once.
///
/// Expected: Ok with exactly the three distinct names
#[tokio::test]
async fn returns_distinct_tag_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    repo.create(CreateArticleParams {
        author_id: user.id,
        title: "First".to_string(),
        description: "Desc".to_string(),
        body: "Body.".to_string(),
        tags: vec!["go".to_string(), "backend".to_string()],
    })
    .await
    .unwrap();
    repo.create(CreateArticleParams {
        author_id: user.id,
        title: "Second".to_string(),
        description: "Desc".to_string(),
        body: "Body.".to_string(),
        tags: vec!["go".to_string(), "rust".to_string()],
    })
    .await
    .unwrap();

    let mut tags = repo.get_tags().await.unwrap();
    tags.sort();

    assert_eq!(
        tags,
        vec!["backend".to_string(), "go".to_string(), "rust".to_string()]
    );

    Ok(())
}

/// Tests listing tags on an empty database.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let tags = repo.get_tags().await.unwrap();

    assert!(tags.is_empty());

    Ok(())
}
