// src/domain/post/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::value_objects::{PostId, PostStatus, SeoMeta, Slug, Tag};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Blog post aggregate. Every mutator returns a new value; callers must
/// persist the returned post explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    pub content_markdown: String,
    pub status: PostStatus,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
    pub seo_meta: Option<SeoMeta>,
    pub tags: Vec<Tag>,
    pub author_id: Option<Uuid>,
    pub reading_time_min: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional-field change set for `Post::update`. A `None` field keeps the
/// current value; `status` and `published_at` are deliberately absent —
/// only `publish`/`unpublish` touch them.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content_markdown: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image_url: Option<String>,
    pub seo_meta: Option<SeoMeta>,
    pub tags: Option<Vec<Tag>>,
    pub reading_time_min: Option<i32>,
}

impl Post {
    /// Create a new draft. The slug is derived from `slug_text`, falling
    /// back to the title when `slug_text` is empty. Identity and time are
    /// injected; the domain never samples either.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: PostId,
        title: impl Into<String>,
        slug_text: &str,
        content_markdown: impl Into<String>,
        excerpt: Option<String>,
        tags: Vec<Tag>,
        author_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let source = if slug_text.trim().is_empty() {
            title.as_str()
        } else {
            slug_text
        };
        let slug = Slug::from_text(source)?;

        Ok(Self {
            id,
            title,
            slug,
            content_markdown: content_markdown.into(),
            status: PostStatus::Draft,
            excerpt,
            published_at: None,
            cover_image_url: None,
            seo_meta: None,
            tags,
            author_id,
            reading_time_min: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn publish(&self, now: DateTime<Utc>) -> Self {
        Self {
            status: PostStatus::Published,
            published_at: Some(now),
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn unpublish(&self, now: DateTime<Utc>) -> Self {
        Self {
            status: PostStatus::Draft,
            published_at: None,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Merge the supplied changes over the current state. Supplied slug
    /// text is re-normalized and may fail with `InvalidSlug`.
    pub fn update(&self, changes: PostChanges, now: DateTime<Utc>) -> DomainResult<Self> {
        let slug = match changes.slug.as_deref() {
            Some(text) => Slug::from_text(text)?,
            None => self.slug.clone(),
        };

        Ok(Self {
            id: self.id,
            title: changes.title.unwrap_or_else(|| self.title.clone()),
            slug,
            content_markdown: changes
                .content_markdown
                .unwrap_or_else(|| self.content_markdown.clone()),
            status: self.status,
            excerpt: changes.excerpt.or_else(|| self.excerpt.clone()),
            published_at: self.published_at,
            cover_image_url: changes
                .cover_image_url
                .or_else(|| self.cover_image_url.clone()),
            seo_meta: changes.seo_meta.or_else(|| self.seo_meta.clone()),
            tags: changes.tags.unwrap_or_else(|| self.tags.clone()),
            author_id: self.author_id,
            reading_time_min: changes.reading_time_min.or(self.reading_time_min),
            created_at: self.created_at,
            updated_at: now,
        })
    }
}
