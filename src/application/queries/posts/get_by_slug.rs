// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::Slug,
};

impl PostQueryService {
    /// Public lookup. Absent slugs and drafts both come back as `None`:
    /// published-only visibility lives here, not in the repository.
    pub async fn get_published_post_by_slug(
        &self,
        slug: &str,
    ) -> ApplicationResult<Option<PostDto>> {
        // Text that is not a canonical slug cannot name a stored post.
        let Ok(slug) = Slug::parse(slug) else {
            return Ok(None);
        };

        let post = self.posts.find_by_slug(&slug).await?;
        Ok(post.filter(|p| p.is_published()).map(Into::into))
    }
}
