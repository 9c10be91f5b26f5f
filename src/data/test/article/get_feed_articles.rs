use super::*;

/// Tests the feed over a followed-author set.
///
/// Only articles authored by the followed users may appear, newest first.
///
/// Expected: Ok with the two followed authors' articles in recency order
#[tokio::test]
async fn returns_followed_authors_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let followed_one = factory::user::create_user(db).await?;
    let followed_two = factory::user::create_user(db).await?;
    let unfollowed = factory::user::create_user(db).await?;
    let now = Utc::now();

    let older = factory::article::ArticleFactory::new(db, followed_one.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::article::ArticleFactory::new(db, followed_two.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::article::create_article(db, unfollowed.id).await?;

    let repo = ArticleRepository::new(db);
    let feed = repo
        .get_feed_articles(&[followed_one.id, followed_two.id], 20, 0)
        .await
        .unwrap();

    let ids: Vec<i32> = feed.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests the feed with an empty followed set.
///
/// Expected: Ok with an empty Vec, not an error
#[tokio::test]
async fn empty_followed_set_yields_empty_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let feed = repo.get_feed_articles(&[], 20, 0).await;

    assert!(feed.is_ok());
    assert!(feed.unwrap().is_empty());

    Ok(())
}

/// Tests feed pagination.
///
/// Expected: Ok with the page bounded by limit and shifted by offset
#[tokio::test]
async fn paginates_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let now = Utc::now();
    for hours in 1..=3 {
        factory::article::ArticleFactory::new(db, author.id)
            .created_at(now - Duration::hours(hours))
            .build()
            .await?;
    }

    let repo = ArticleRepository::new(db);
    let first = repo.get_feed_articles(&[author.id], 2, 0).await.unwrap();
    let rest = repo.get_feed_articles(&[author.id], 2, 2).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(rest.len(), 1);

    Ok(())
}
