use super::*;

/// Tests comment listing order.
///
/// Comments are returned oldest first, so three sequential comments come
/// back in creation order.
///
/// Expected: Ok with ids in creation order
#[tokio::test]
async fn returns_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let first = factory::comment::create_comment(db, article.id, author.id).await?;
    let second = factory::comment::create_comment(db, article.id, author.id).await?;
    let third = factory::comment::create_comment(db, article.id, author.id).await?;

    let repo = ArticleRepository::new(db);
    let comments = repo.get_comments(article.id).await.unwrap();

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that the listing is scoped to one article.
///
/// Expected: Ok with only the target article's comment
#[tokio::test]
async fn scopes_comments_to_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let other = factory::article::create_article(db, author.id).await?;

    let mine = factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::create_comment(db, other.id, author.id).await?;

    let repo = ArticleRepository::new(db);
    let comments = repo.get_comments(article.id).await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, mine.id);

    Ok(())
}

/// Tests listing comments for an article without any.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;

    let repo = ArticleRepository::new(db);
    let comments = repo.get_comments(article.id).await.unwrap();

    assert!(comments.is_empty());

    Ok(())
}
