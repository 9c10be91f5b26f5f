use super::*;

/// Tests that the listing orders newest first.
///
/// Expected: Ok with articles in reverse creation order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let oldest = factory::article::ArticleFactory::new(db, user.id)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let middle = factory::article::ArticleFactory::new(db, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::article::ArticleFactory::new(db, user.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .get_articles(ArticleFilter::default(), 20, 0)
        .await
        .unwrap();

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests limit/offset pagination continuity.
///
/// Two consecutive pages of size 2 over 4 rows must partition them with no
/// overlap and no gap.
///
/// Expected: Ok; the two pages cover all 4 ids exactly once
#[tokio::test]
async fn paginates_without_overlap_or_gaps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let mut seeded = Vec::new();
    for hours in 1..=4 {
        let article = factory::article::ArticleFactory::new(db, user.id)
            .created_at(now - Duration::hours(hours))
            .build()
            .await?;
        seeded.push(article.id);
    }

    let repo = ArticleRepository::new(db);
    let first_page = repo
        .get_articles(ArticleFilter::default(), 2, 0)
        .await
        .unwrap();
    let second_page = repo
        .get_articles(ArticleFilter::default(), 2, 2)
        .await
        .unwrap();

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 2);

    let mut paged: Vec<i32> = first_page
        .iter()
        .chain(second_page.iter())
        .map(|a| a.id)
        .collect();
    paged.sort();
    seeded.sort();
    assert_eq!(paged, seeded);

    Ok(())
}

/// Tests filtering by tag name.
///
/// Expected: Ok with only the tagged article
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    let tagged = repo
        .create(CreateArticleParams {
            author_id: user.id,
            title: "Tagged".to_string(),
            description: "Desc".to_string(),
            body: "Body.".to_string(),
            tags: vec!["rust".to_string()],
        })
        .await
        .unwrap();
    repo.create(CreateArticleParams {
        author_id: user.id,
        title: "Other".to_string(),
        description: "Desc".to_string(),
        body: "Body.".to_string(),
        tags: vec!["go".to_string()],
    })
    .await
    .unwrap();

    let articles = repo
        .get_articles(
            ArticleFilter {
                tag: Some("rust".to_string()),
                ..Default::default()
            },
            20,
            0,
        )
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, tagged.id);

    Ok(())
}

/// Tests filtering by author username.
///
/// Expected: Ok with only that author's articles
#[tokio::test]
async fn filters_by_author_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let mine = factory::article::create_article(db, author.id).await?;
    factory::article::create_article(db, other.id).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .get_articles(
            ArticleFilter {
                author: Some(author.username.clone()),
                ..Default::default()
            },
            20,
            0,
        )
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, mine.id);
    assert_eq!(articles[0].author.username, author.username);

    Ok(())
}

/// Tests filtering by favoriting user.
///
/// Expected: Ok with only the favorited article
#[tokio::test]
async fn filters_by_favorited_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let favorited = factory::article::create_article(db, author.id).await?;
    factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    repo.add_favorite(favorited.id, reader.id).await.unwrap();

    let articles = repo
        .get_articles(
            ArticleFilter {
                favorited_by: Some(reader.id),
                ..Default::default()
            },
            20,
            0,
        )
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, favorited.id);
    assert_eq!(articles[0].favorites_count, 1);

    Ok(())
}

/// Tests that multiple filters AND-combine.
///
/// An article matching the tag but not the author must not appear.
///
/// Expected: Ok with only the article matching both filters
#[tokio::test]
async fn combines_filters_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = ArticleRepository::new(db);

    let matching = repo
        .create(CreateArticleParams {
            author_id: author.id,
            title: "Mine Tagged".to_string(),
            description: "Desc".to_string(),
            body: "Body.".to_string(),
            tags: vec!["rust".to_string()],
        })
        .await
        .unwrap();
    repo.create(CreateArticleParams {
        author_id: other.id,
        title: "Theirs Tagged".to_string(),
        description: "Desc".to_string(),
        body: "Body.".to_string(),
        tags: vec!["rust".to_string()],
    })
    .await
    .unwrap();

    let articles = repo
        .get_articles(
            ArticleFilter {
                tag: Some("rust".to_string()),
                author: Some(author.username.clone()),
                ..Default::default()
            },
            20,
            0,
        )
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, matching.id);

    Ok(())
}
