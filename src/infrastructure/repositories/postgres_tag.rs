// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::post::{Slug, Tag, TagId, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: Uuid,
    name: String,
    slug: String,
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_or_create(&self, slug_text: &str) -> DomainResult<Tag> {
        let slug = Slug::from_text(slug_text)?;
        let name = slug_text.trim();

        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict, so one round trip covers both halves of find-or-create.
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (id, name, slug) VALUES ($1, $2, $3)
             ON CONFLICT (slug) DO UPDATE SET name = tags.name
             RETURNING id, name, slug",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Tag {
            id: TagId(row.id),
            name: row.name,
            slug: Slug::parse(row.slug)?,
        })
    }
}
