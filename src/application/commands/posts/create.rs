// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{PostCreateInput, PostDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainError,
        post::{entity::PostChanges, services::estimate_reading_time_min, Post, PostId, Slug},
    },
};
use uuid::Uuid;

impl PostCommandService {
    /// Create a draft post. The slug pre-check narrows, but does not
    /// close, the race against a concurrent create; the store's unique
    /// index has the last word.
    pub async fn create_post(
        &self,
        author_id: Option<Uuid>,
        input: PostCreateInput,
    ) -> ApplicationResult<PostDto> {
        let slug_source = input
            .slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&input.title);
        let slug = Slug::from_text(slug_source)?;

        if self.posts.slug_exists(&slug, None).await? {
            return Err(DomainError::DuplicateSlug(slug.to_string()).into());
        }

        let tags = self.resolve_tags(&input.tag_slugs).await?;
        let now = self.clock.now();

        let post = Post::create(
            PostId(self.ids.generate()),
            input.title,
            slug.as_str(),
            input.content_markdown,
            input.excerpt,
            tags,
            author_id,
            now,
        )?;

        let post = post.update(
            PostChanges {
                cover_image_url: input.cover_image_url,
                seo_meta: input.seo_meta.map(Into::into),
                reading_time_min: Some(estimate_reading_time_min(&post.content_markdown)),
                ..PostChanges::default()
            },
            now,
        )?;

        let saved = self.posts.create(post).await?;
        Ok(saved.into())
    }
}
