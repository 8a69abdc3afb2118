use crate::domain::post::{Post, PostStatus, SeoMeta, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            slug: tag.slug.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoMetaDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image_url: Option<String>,
    pub canonical_url: Option<String>,
}

impl From<SeoMeta> for SeoMetaDto {
    fn from(meta: SeoMeta) -> Self {
        Self {
            title: meta.title().map(str::to_owned),
            description: meta.description().map(str::to_owned),
            og_image_url: meta.og_image_url().map(str::to_owned),
            canonical_url: meta.canonical_url().map(str::to_owned),
        }
    }
}

impl From<SeoMetaDto> for SeoMeta {
    fn from(dto: SeoMetaDto) -> Self {
        SeoMeta::new(
            dto.title,
            dto.description,
            dto.og_image_url,
            dto.canonical_url,
        )
    }
}

/// Full projection of a post, including the markdown body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content_markdown: String,
    pub status: PostStatus,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
    pub seo_meta: Option<SeoMetaDto>,
    pub tags: Vec<TagDto>,
    pub author_id: Option<Uuid>,
    pub reading_time_min: Option<i32>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            slug: post.slug.into(),
            excerpt: post.excerpt,
            content_markdown: post.content_markdown,
            status: post.status,
            published_at: post.published_at,
            cover_image_url: post.cover_image_url,
            seo_meta: post.seo_meta.map(Into::into),
            tags: post.tags.into_iter().map(Into::into).collect(),
            author_id: post.author_id,
            reading_time_min: post.reading_time_min,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Listing projection: everything a card view needs, without the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListItemDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
    pub tags: Vec<TagDto>,
    pub status: PostStatus,
}

impl From<Post> for PostListItemDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            slug: post.slug.into(),
            excerpt: post.excerpt,
            published_at: post.published_at,
            cover_image_url: post.cover_image_url,
            tags: post.tags.into_iter().map(Into::into).collect(),
            status: post.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostCreateInput {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content_markdown: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub seo_meta: Option<SeoMetaDto>,
    #[serde(default)]
    pub tag_slugs: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostUpdateInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content_markdown: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub seo_meta: Option<SeoMetaDto>,
    /// `None` keeps the current tag set; `Some(vec![])` clears it.
    #[serde(default)]
    pub tag_slugs: Option<Vec<String>>,
}
