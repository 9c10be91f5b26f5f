use super::*;

/// Tests creating an article with tags.
///
/// Verifies that the repository creates the article row, derives the slug
/// from the title, links both tags, and composes the result with the author
/// and a zero favorite count.
///
/// Expected: Ok with slug "hello-world", both tags, favorites_count 0
#[tokio::test]
async fn creates_article_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Hello World".to_string(),
            description: "A greeting".to_string(),
            body: "The body.".to_string(),
            tags: vec!["go".to_string(), "backend".to_string()],
        })
        .await;

    assert!(result.is_ok());
    let article = result.unwrap();
    assert_eq!(article.slug, "hello-world");
    assert_eq!(article.title, "Hello World");
    assert_eq!(article.author.id, user.id);
    assert_eq!(article.author.username, user.username);
    assert_eq!(article.tags, vec!["backend".to_string(), "go".to_string()]);
    assert_eq!(article.favorites_count, 0);
    assert_eq!(article.created_at, article.updated_at);

    Ok(())
}

/// Tests slug disambiguation for a duplicate title.
///
/// Verifies that a second article with the same title receives a distinct
/// slug with a numbered suffix instead of failing on the unique index.
///
/// Expected: Ok with slug "hello-world-2", distinct from the first
#[tokio::test]
async fn disambiguates_slug_for_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    let first = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Hello World".to_string(),
            description: "First".to_string(),
            body: "First body.".to_string(),
            tags: Vec::new(),
        })
        .await
        .unwrap();

    let second = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Hello World".to_string(),
            description: "Second".to_string(),
            body: "Second body.".to_string(),
            tags: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-2");
    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests creating an article without tags.
///
/// Expected: Ok with an empty tag list and no link rows
#[tokio::test]
async fn creates_article_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    let article = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Untagged".to_string(),
            description: "No tags".to_string(),
            body: "Body.".to_string(),
            tags: Vec::new(),
        })
        .await
        .unwrap();

    assert!(article.tags.is_empty());

    let links = entity::prelude::ArticleTag::find()
        .filter(entity::article_tag::Column::ArticleId.eq(article.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests that duplicate tag names collapse to a single link.
///
/// Expected: Ok with one tag and one link row
#[tokio::test]
async fn collapses_duplicate_tag_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    let article = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Repeated".to_string(),
            description: "Dup tags".to_string(),
            body: "Body.".to_string(),
            tags: vec!["rust".to_string(), "rust".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(article.tags, vec!["rust".to_string()]);

    let links = entity::prelude::ArticleTag::find()
        .filter(entity::article_tag::Column::ArticleId.eq(article.id))
        .count(db)
        .await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests that an existing tag row is reused rather than duplicated.
///
/// Two articles sharing a tag name must converge on a single tag row.
///
/// Expected: one row in the tags table for the shared name
#[tokio::test]
async fn reuses_existing_tag_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    for title in ["First", "Second"] {
        repo.create(CreateArticleParams {
            author_id: user.id,
            title: title.to_string(),
            description: "Shared tag".to_string(),
            body: "Body.".to_string(),
            tags: vec!["shared".to_string()],
        })
        .await
        .unwrap();
    }

    let tag_rows = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Name.eq("shared"))
        .count(db)
        .await?;
    assert_eq!(tag_rows, 1);

    Ok(())
}
