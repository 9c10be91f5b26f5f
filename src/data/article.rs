use std::collections::{HashMap, HashSet};

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    error::data::DataError,
    model::{
        article::{Article, ArticleFilter, CreateArticleParams, UpdateArticleParams},
        comment::{Comment, CreateCommentParams},
        user::Author,
    },
    txn::run_in_txn,
    util::slug::generate_slug,
};

/// Repository providing database access to articles and their relations.
///
/// This is the single point of access for articles, tags, favorites, and
/// comments. It holds a reference to the pooled database connection; callers
/// construct one per unit of work.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an article by ID with its composed author, tags, and favorite count.
    ///
    /// # Arguments
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(Article)` - The composed article
    /// - `Err(DataError::NotFound)` - No article with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Article, DataError> {
        let model = entity::prelude::Article::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DataError::NotFound(format!("article {}", id)))?;

        compose_one(self.db, model).await
    }

    /// Creates an article with its tag links and returns the composed result.
    ///
    /// The slug is derived from the title; a collision with an existing slug
    /// is resolved by probing numbered suffixes. Tag rows are created lazily
    /// for names not seen before. The article insert and all tag writes run
    /// in one transaction.
    ///
    /// # Arguments
    /// - `params` - Article fields and tag names, pre-validated by the caller
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article with generated id, slug, and timestamps
    /// - `Err(DataError::Conflict)` - A concurrent write took the probed slug
    /// - `Err(DataError)` - Database error
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, DataError> {
        run_in_txn(self.db, move |txn| {
            Box::pin(async move {
                let now = Utc::now();
                let slug = resolve_slug(txn, &params.title, None).await?;

                let article = entity::article::ActiveModel {
                    author_id: ActiveValue::Set(params.author_id),
                    slug: ActiveValue::Set(slug),
                    title: ActiveValue::Set(params.title),
                    description: ActiveValue::Set(params.description),
                    body: ActiveValue::Set(params.body),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(txn)
                .await?;

                let tag_ids = upsert_tags(txn, &params.tags).await?;
                link_tags(txn, article.id, &tag_ids).await?;

                compose_one(txn, article).await
            })
        })
        .await
    }

    /// Applies a partial update to an article.
    ///
    /// Only provided, non-empty fields overwrite; a new title regenerates the
    /// slug. When a tag list is provided the current tag set is diffed against
    /// it: removed links are deleted and new links inserted. All statements
    /// run in one transaction.
    ///
    /// # Arguments
    /// - `params` - Article ID plus the fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated, composed article
    /// - `Err(DataError::NotFound)` - No article with that ID
    /// - `Err(DataError)` - Database error
    pub async fn update(&self, params: UpdateArticleParams) -> Result<Article, DataError> {
        run_in_txn(self.db, move |txn| {
            Box::pin(async move {
                let model = entity::prelude::Article::find_by_id(params.id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| DataError::NotFound(format!("article {}", params.id)))?;

                let mut active: entity::article::ActiveModel = model.into();

                if let Some(title) = params.title.filter(|t| !t.is_empty()) {
                    let slug = resolve_slug(txn, &title, Some(params.id)).await?;
                    active.slug = ActiveValue::Set(slug);
                    active.title = ActiveValue::Set(title);
                }
                if let Some(description) = params.description.filter(|d| !d.is_empty()) {
                    active.description = ActiveValue::Set(description);
                }
                if let Some(body) = params.body.filter(|b| !b.is_empty()) {
                    active.body = ActiveValue::Set(body);
                }
                active.updated_at = ActiveValue::Set(Utc::now());

                let updated = active.update(txn).await?;

                if let Some(tags) = params.tags {
                    replace_tags(txn, updated.id, &tags).await?;
                }

                compose_one(txn, updated).await
            })
        })
        .await
    }

    /// Deletes an article, cascading to its comments, favorites, and tag links.
    ///
    /// Children are deleted first, then the article row, all in one
    /// transaction; any step failing rolls the whole sequence back.
    ///
    /// # Arguments
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(())` - Article and all dependent rows deleted
    /// - `Err(DataError::NotFound)` - No article with that ID (nothing deleted)
    pub async fn delete(&self, id: i32) -> Result<(), DataError> {
        run_in_txn(self.db, move |txn| {
            Box::pin(async move {
                entity::prelude::Comment::delete_many()
                    .filter(entity::comment::Column::ArticleId.eq(id))
                    .exec(txn)
                    .await?;

                entity::prelude::Favorite::delete_many()
                    .filter(entity::favorite::Column::ArticleId.eq(id))
                    .exec(txn)
                    .await?;

                entity::prelude::ArticleTag::delete_many()
                    .filter(entity::article_tag::Column::ArticleId.eq(id))
                    .exec(txn)
                    .await?;

                let result = entity::prelude::Article::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(DataError::NotFound(format!("article {}", id)));
                }

                Ok(())
            })
        })
        .await
    }

    /// Gets global articles, newest first, bounded by limit/offset.
    ///
    /// Filters are AND-combined when more than one is given and translate to
    /// joins with parameterized predicates.
    ///
    /// # Arguments
    /// - `filter` - Optional tag, author-username, and favorited-by filters
    /// - `limit` - Maximum number of articles to return
    /// - `offset` - Number of articles to skip
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Composed articles, newest first
    /// - `Err(DataError)` - Database error
    pub async fn get_articles(
        &self,
        filter: ArticleFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Article>, DataError> {
        let mut query = entity::prelude::Article::find();

        if let Some(tag) = filter.tag {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::article::Relation::ArticleTag.def(),
                )
                .join(JoinType::InnerJoin, entity::article_tag::Relation::Tag.def())
                .filter(entity::tag::Column::Name.eq(tag));
        }

        if let Some(author) = filter.author {
            query = query
                .join(JoinType::InnerJoin, entity::article::Relation::User.def())
                .filter(entity::user::Column::Username.eq(author));
        }

        if let Some(user_id) = filter.favorited_by {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::article::Relation::Favorite.def(),
                )
                .filter(entity::favorite::Column::UserId.eq(user_id));
        }

        let models = query
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        compose_articles(self.db, models).await
    }

    /// Gets articles authored by any of the followed users, newest first.
    ///
    /// An empty followed set yields an empty result, not an error.
    ///
    /// # Arguments
    /// - `author_ids` - IDs of the followed users
    /// - `limit` - Maximum number of articles to return
    /// - `offset` - Number of articles to skip
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Composed articles, newest first
    /// - `Err(DataError)` - Database error
    pub async fn get_feed_articles(
        &self,
        author_ids: &[i32],
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Article>, DataError> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::prelude::Article::find()
            .filter(entity::article::Column::AuthorId.is_in(author_ids.iter().copied()))
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        compose_articles(self.db, models).await
    }

    /// Checks whether the article is favorited by the user.
    ///
    /// # Arguments
    /// - `article_id` - Article ID
    /// - `user_id` - User ID
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the favorite relation exists
    /// - `Err(DataError)` - Database error
    pub async fn is_favorited(&self, article_id: i32, user_id: i32) -> Result<bool, DataError> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Favorites an article for a user.
    ///
    /// Idempotent: favoriting an already-favorited article is a no-op, not an
    /// error.
    ///
    /// # Arguments
    /// - `article_id` - Article ID
    /// - `user_id` - User ID
    ///
    /// # Returns
    /// - `Ok(())` - The favorite relation exists after the call
    /// - `Err(DataError)` - Database error
    pub async fn add_favorite(&self, article_id: i32, user_id: i32) -> Result<(), DataError> {
        let insert = entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            user_id: ActiveValue::Set(user_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::favorite::Column::ArticleId,
                entity::favorite::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(self.db)
        .await;

        match insert {
            Ok(_) => Ok(()),
            // Conflict hit DO NOTHING: the pair was already favorited.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Unfavorites an article for a user.
    ///
    /// Removing a favorite that does not exist is a no-op, not an error.
    ///
    /// # Arguments
    /// - `article_id` - Article ID
    /// - `user_id` - User ID
    ///
    /// # Returns
    /// - `Ok(())` - The favorite relation is absent after the call
    /// - `Err(DataError)` - Database error
    pub async fn delete_favorite(&self, article_id: i32, user_id: i32) -> Result<(), DataError> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets all distinct tag names, in no particular order.
    pub async fn get_tags(&self) -> Result<Vec<String>, DataError> {
        let tags = entity::prelude::Tag::find().all(self.db).await?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }

    /// Creates a comment on an existing article.
    ///
    /// The article is checked first so a comment can never be attached to a
    /// deleted article; the check failing surfaces as `NotFound` rather than
    /// an orphan row.
    ///
    /// # Arguments
    /// - `params` - Comment body plus article and author references
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with id and timestamps
    /// - `Err(DataError::NotFound)` - The article no longer exists
    /// - `Err(DataError)` - Database error
    pub async fn create_comment(&self, params: CreateCommentParams) -> Result<Comment, DataError> {
        let article = entity::prelude::Article::find_by_id(params.article_id)
            .one(self.db)
            .await?;
        if article.is_none() {
            return Err(DataError::NotFound(format!(
                "article {}",
                params.article_id
            )));
        }

        let now = Utc::now();
        let comment = entity::comment::ActiveModel {
            body: ActiveValue::Set(params.body),
            article_id: ActiveValue::Set(params.article_id),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = load_author(self.db, comment.author_id).await?;

        Ok(Comment::from_parts(comment, author))
    }

    /// Gets the comments of an article, oldest first.
    ///
    /// # Arguments
    /// - `article_id` - Article ID
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Composed comments in creation order
    /// - `Err(DataError)` - Database error
    pub async fn get_comments(&self, article_id: i32) -> Result<Vec<Comment>, DataError> {
        let models = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        compose_comments(self.db, models).await
    }

    /// Finds a comment by ID.
    ///
    /// # Arguments
    /// - `id` - Comment ID
    ///
    /// # Returns
    /// - `Ok(Comment)` - The composed comment
    /// - `Err(DataError::NotFound)` - No comment with that ID
    pub async fn get_comment_by_id(&self, id: i32) -> Result<Comment, DataError> {
        let model = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DataError::NotFound(format!("comment {}", id)))?;

        let author = load_author(self.db, model.author_id).await?;

        Ok(Comment::from_parts(model, author))
    }

    /// Deletes a comment.
    ///
    /// # Arguments
    /// - `id` - Comment ID
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(DataError::NotFound)` - No comment with that ID
    pub async fn delete_comment(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DataError::NotFound(format!("comment {}", id)));
        }

        Ok(())
    }
}

/// Finds a free slug for the title by probing numbered suffixes.
///
/// The base slug is tried first, then `{base}-2`, `{base}-3`, and so on until
/// a candidate is unused. `skip_id` excludes a row from the probe so an
/// article keeps its own slug on a same-title update. A concurrent writer
/// racing for the same candidate still trips the unique index, surfacing as
/// a `Conflict` the caller can retry.
async fn resolve_slug<C: ConnectionTrait>(
    conn: &C,
    title: &str,
    skip_id: Option<i32>,
) -> Result<String, DataError> {
    let base = generate_slug(title);
    let mut candidate = base.clone();
    let mut suffix = 2;

    loop {
        let mut query = entity::prelude::Article::find()
            .filter(entity::article::Column::Slug.eq(candidate.as_str()));
        if let Some(id) = skip_id {
            query = query.filter(entity::article::Column::Id.ne(id));
        }

        if query.count(conn).await? == 0 {
            return Ok(candidate);
        }

        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
}

/// Ensures a tag row exists for each name and returns their IDs.
///
/// Duplicate names are collapsed; missing rows are created with
/// `ON CONFLICT DO NOTHING` so concurrent creators converge on one row.
async fn upsert_tags<C: ConnectionTrait>(
    conn: &C,
    names: &[String],
) -> Result<Vec<i32>, DataError> {
    let mut seen = HashSet::new();
    let unique: Vec<&String> = names.iter().filter(|name| seen.insert(name.as_str())).collect();

    if unique.is_empty() {
        return Ok(Vec::new());
    }

    for name in &unique {
        let insert = entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set((*name).clone()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::tag::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec(conn)
        .await;

        match insert {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let tags = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Name.is_in(unique.iter().map(|name| name.as_str())))
        .all(conn)
        .await?;

    Ok(tags.into_iter().map(|tag| tag.id).collect())
}

/// Links the article to each tag ID.
async fn link_tags<C: ConnectionTrait>(
    conn: &C,
    article_id: i32,
    tag_ids: &[i32],
) -> Result<(), DataError> {
    for tag_id in tag_ids {
        entity::article_tag::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            tag_id: ActiveValue::Set(*tag_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Replaces the article's tag set with the given names.
///
/// The current links are diffed against the desired set: links to tags no
/// longer named are deleted, links to newly named tags are inserted, and
/// links that already match are left untouched.
async fn replace_tags<C: ConnectionTrait>(
    conn: &C,
    article_id: i32,
    names: &[String],
) -> Result<(), DataError> {
    let desired = upsert_tags(conn, names).await?;
    let desired_set: HashSet<i32> = desired.iter().copied().collect();

    let current: Vec<i32> = entity::prelude::ArticleTag::find()
        .filter(entity::article_tag::Column::ArticleId.eq(article_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect();
    let current_set: HashSet<i32> = current.iter().copied().collect();

    let removed: Vec<i32> = current
        .into_iter()
        .filter(|id| !desired_set.contains(id))
        .collect();
    if !removed.is_empty() {
        entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .filter(entity::article_tag::Column::TagId.is_in(removed))
            .exec(conn)
            .await?;
    }

    let added: Vec<i32> = desired
        .into_iter()
        .filter(|id| !current_set.contains(id))
        .collect();
    link_tags(conn, article_id, &added).await?;

    Ok(())
}

/// Loads a single user as a composed author.
async fn load_author<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Author, DataError> {
    let user = entity::prelude::User::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("user {}", user_id)))?;

    Ok(Author::from_entity(user))
}

/// Composes a single article row into its domain model.
async fn compose_one<C: ConnectionTrait>(
    conn: &C,
    model: entity::article::Model,
) -> Result<Article, DataError> {
    let id = model.id;
    let mut composed = compose_articles(conn, vec![model]).await?;

    composed
        .pop()
        .ok_or_else(|| DataError::NotFound(format!("article {}", id)))
}

/// Composes a page of article rows into domain models.
///
/// Batches the follow-up queries for the whole page: authors by id set, tag
/// links with their related tags, and favorite rows counted per article in
/// process.
async fn compose_articles<C: ConnectionTrait>(
    conn: &C,
    models: Vec<entity::article::Model>,
) -> Result<Vec<Article>, DataError> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let article_ids: Vec<i32> = models.iter().map(|model| model.id).collect();
    let author_ids: Vec<i32> = models.iter().map(|model| model.author_id).collect();

    let authors: HashMap<i32, Author> = entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(author_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|user| (user.id, Author::from_entity(user)))
        .collect();

    let links = entity::prelude::ArticleTag::find()
        .filter(entity::article_tag::Column::ArticleId.is_in(article_ids.clone()))
        .find_also_related(entity::prelude::Tag)
        .all(conn)
        .await?;
    let mut tags_by_article: HashMap<i32, Vec<String>> = HashMap::new();
    for (link, tag) in links {
        if let Some(tag) = tag {
            tags_by_article
                .entry(link.article_id)
                .or_default()
                .push(tag.name);
        }
    }

    let mut favorites_by_article: HashMap<i32, u64> = HashMap::new();
    let favorites = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::ArticleId.is_in(article_ids))
        .all(conn)
        .await?;
    for favorite in favorites {
        *favorites_by_article.entry(favorite.article_id).or_default() += 1;
    }

    let mut articles = Vec::with_capacity(models.len());
    for model in models {
        let author = authors.get(&model.author_id).cloned().ok_or_else(|| {
            DataError::NotFound(format!("author {} of article {}", model.author_id, model.id))
        })?;
        let mut tags = tags_by_article.remove(&model.id).unwrap_or_default();
        tags.sort();
        let favorites_count = favorites_by_article.get(&model.id).copied().unwrap_or(0);

        articles.push(Article::from_parts(model, author, tags, favorites_count));
    }

    Ok(articles)
}

/// Composes comment rows into domain models, batching the author lookup.
async fn compose_comments<C: ConnectionTrait>(
    conn: &C,
    models: Vec<entity::comment::Model>,
) -> Result<Vec<Comment>, DataError> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let author_ids: Vec<i32> = models.iter().map(|model| model.author_id).collect();
    let authors: HashMap<i32, Author> = entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(author_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|user| (user.id, Author::from_entity(user)))
        .collect();

    let mut comments = Vec::with_capacity(models.len());
    for model in models {
        let author = authors.get(&model.author_id).cloned().ok_or_else(|| {
            DataError::NotFound(format!("author {} of comment {}", model.author_id, model.id))
        })?;

        comments.push(Comment::from_parts(model, author));
    }

    Ok(comments)
}
