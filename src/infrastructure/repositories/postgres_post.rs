// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Post, PostFilters, PostId, PostPage, PostRepository, SeoMeta, Slug, Tag, TagId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashMap;
use uuid::Uuid;

const POST_COLUMNS: &str = "id, title, slug, excerpt, content_md, status, published_at, \
     cover_image_url, seo_title, seo_description, og_image_url, canonical_url, \
     reading_time_min, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content_md: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    cover_image_url: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    og_image_url: Option<String>,
    canonical_url: Option<String>,
    reading_time_min: Option<i32>,
    author_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: Uuid,
    id: Uuid,
    name: String,
    slug: String,
}

fn hydrate(row: PostRow, tags: Vec<Tag>) -> DomainResult<Post> {
    let seo_meta = if row.seo_title.is_some()
        || row.seo_description.is_some()
        || row.og_image_url.is_some()
        || row.canonical_url.is_some()
    {
        Some(SeoMeta::new(
            row.seo_title,
            row.seo_description,
            row.og_image_url,
            row.canonical_url,
        ))
    } else {
        None
    };

    Ok(Post {
        id: PostId(row.id),
        title: row.title,
        slug: Slug::parse(row.slug)?,
        content_markdown: row.content_md,
        status: row.status.parse()?,
        excerpt: row.excerpt,
        published_at: row.published_at,
        cover_image_url: row.cover_image_url,
        seo_meta,
        tags,
        author_id: row.author_id,
        reading_time_min: row.reading_time_min,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

impl PostgresPostRepository {
    /// One round trip for the tag sets of a whole page of posts.
    async fn tags_for(&self, post_ids: &[Uuid]) -> DomainResult<HashMap<Uuid, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id, t.id, t.name, t.slug
             FROM post_tags pt
             JOIN tags t ON t.id = pt.tag_id
             WHERE pt.post_id = ANY($1)
             ORDER BY t.slug",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_post: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in rows {
            let tag = Tag {
                id: TagId(row.id),
                name: row.name,
                slug: Slug::parse(row.slug)?,
            };
            by_post.entry(row.post_id).or_default().push(tag);
        }
        Ok(by_post)
    }

    async fn hydrate_one(&self, row: Option<PostRow>) -> DomainResult<Option<Post>> {
        let Some(row) = row else {
            return Ok(None);
        };
        let mut tags = self.tags_for(&[row.id]).await?;
        let post_tags = tags.remove(&row.id).unwrap_or_default();
        hydrate(row, post_tags).map(Some)
    }

    fn apply_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filters: &'a PostFilters) {
        let mut has_where = false;
        let prefix = |builder: &mut QueryBuilder<'a, Postgres>, has_where: &mut bool| {
            if *has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                *has_where = true;
            }
        };

        if let Some(status) = filters.status {
            prefix(builder, &mut has_where);
            builder.push("status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(search) = filters.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            prefix(builder, &mut has_where);
            let pattern = format!("%{search}%");
            builder.push("(title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(tag) = filters.tag.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            prefix(builder, &mut has_where);
            builder.push(
                "EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = posts.id AND t.slug = ",
            );
            builder.push_bind(tag);
            builder.push(")");
        }
    }

    async fn replace_tag_links(
        tx: &mut Transaction<'_, Postgres>,
        post_id: PostId,
        tags: &[Tag],
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(Uuid::from(post_id))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        if tags.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::new("INSERT INTO post_tags (post_id, tag_id) ");
        builder.push_values(tags, |mut row, tag| {
            row.push_bind(Uuid::from(post_id)).push_bind(Uuid::from(tag.id));
        });
        builder.push(" ON CONFLICT DO NOTHING");
        builder.build().execute(&mut **tx).await.map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_all(&self, filters: PostFilters) -> DomainResult<PostPage> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_filters(&mut count_builder, &filters);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_filters(&mut builder, &filters);
        builder.push(" ORDER BY updated_at DESC");
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(filters.limit.unwrap_or(10)));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filters.offset.unwrap_or(0)));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.tags_for(&ids).await?;

        let items = rows
            .into_iter()
            .map(|row| {
                let post_tags = tags.remove(&row.id).unwrap_or_default();
                hydrate(row, post_tags)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(PostPage {
            items,
            total: u64::try_from(total).unwrap_or(0),
        })
    }

    async fn create(&self, post: Post) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO posts (id, title, slug, excerpt, content_md, status, published_at, \
             cover_image_url, seo_title, seo_description, og_image_url, canonical_url, \
             reading_time_min, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
        )
        .bind(Uuid::from(post.id))
        .bind(&post.title)
        .bind(post.slug.as_str())
        .bind(&post.excerpt)
        .bind(&post.content_markdown)
        .bind(post.status.as_str())
        .bind(post.published_at)
        .bind(&post.cover_image_url)
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::title))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::description))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::og_image_url))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::canonical_url))
        .bind(post.reading_time_min)
        .bind(post.author_id)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        Self::replace_tag_links(&mut tx, post.id, &post.tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.find_by_id(post.id)
            .await?
            .ok_or_else(|| DomainError::Repository("post row missing after insert".into()))
    }

    async fn update(&self, id: PostId, post: Post) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE posts SET title = $1, slug = $2, excerpt = $3, content_md = $4, \
             status = $5, published_at = $6, cover_image_url = $7, seo_title = $8, \
             seo_description = $9, og_image_url = $10, canonical_url = $11, \
             reading_time_min = $12, updated_at = $13
             WHERE id = $14",
        )
        .bind(&post.title)
        .bind(post.slug.as_str())
        .bind(&post.excerpt)
        .bind(&post.content_markdown)
        .bind(post.status.as_str())
        .bind(post.published_at)
        .bind(&post.cover_image_url)
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::title))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::description))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::og_image_url))
        .bind(post.seo_meta.as_ref().and_then(SeoMeta::canonical_url))
        .bind(post.reading_time_min)
        .bind(post.updated_at)
        .bind(Uuid::from(id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("post not found: {id}")));
        }

        Self::replace_tag_links(&mut tx, id, &post.tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Repository("post row missing after update".into()))
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("post not found: {id}")));
        }
        Ok(())
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<PostId>) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT EXISTS (SELECT 1 FROM posts WHERE slug = ");
        builder.push_bind(slug.as_str());
        if let Some(id) = exclude_id {
            builder.push(" AND id <> ");
            builder.push_bind(Uuid::from(id));
        }
        builder.push(")");

        builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
