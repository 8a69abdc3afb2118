// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{PostDto, PostUpdateInput},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{entity::PostChanges, services::estimate_reading_time_min, PostId, Slug},
    },
};
use uuid::Uuid;

impl PostCommandService {
    pub async fn update_post(
        &self,
        id: Uuid,
        input: PostUpdateInput,
    ) -> ApplicationResult<PostDto> {
        let id = PostId(id);
        let existing = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post not found: {id}")))?;

        // A changed slug must stay unique among all *other* posts.
        if let Some(slug_text) = input.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            let candidate = Slug::from_text(slug_text)?;
            if candidate != existing.slug && self.posts.slug_exists(&candidate, Some(id)).await? {
                return Err(DomainError::DuplicateSlug(candidate.to_string()).into());
            }
        }

        let tags = match &input.tag_slugs {
            Some(slugs) => Some(self.resolve_tags(slugs).await?),
            None => None,
        };

        let reading_time_min = input
            .content_markdown
            .as_deref()
            .map(estimate_reading_time_min);

        let now = self.clock.now();
        let updated = existing.update(
            PostChanges {
                title: input.title,
                slug: input.slug.filter(|s| !s.trim().is_empty()),
                content_markdown: input.content_markdown,
                excerpt: input.excerpt,
                cover_image_url: input.cover_image_url,
                seo_meta: input.seo_meta.map(Into::into),
                tags,
                reading_time_min,
            },
            now,
        )?;

        let saved = self.posts.update(id, updated).await?;
        Ok(saved.into())
    }
}
