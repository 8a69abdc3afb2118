use crate::domain::errors::DomainResult;
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::{PostId, PostStatus, Slug, Tag};
use async_trait::async_trait;

/// Listing criteria. `search` is a case-insensitive substring over title
/// and excerpt; `tag` restricts to posts carrying that tag slug.
#[derive(Debug, Clone, Default)]
pub struct PostFilters {
    pub status: Option<PostStatus>,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub total: u64,
}

/// Persistence contract for posts. Store failures surface as
/// `DomainError::Repository`; the remote store behind the single concrete
/// adapter stays opaque to the rest of the crate.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;

    /// List matching posts ordered by most-recently-updated first.
    async fn find_all(&self, filters: PostFilters) -> DomainResult<PostPage>;

    /// Same as `find_all` with status forced to published.
    async fn find_published(&self, filters: PostFilters) -> DomainResult<PostPage> {
        self.find_all(PostFilters {
            status: Some(PostStatus::Published),
            ..filters
        })
        .await
    }

    /// Fails with `DuplicateSlug` when the slug is taken. The store's
    /// unique index is the arbiter; callers pre-check with `slug_exists`
    /// but that only narrows the race.
    async fn create(&self, post: Post) -> DomainResult<Post>;

    /// Fails with `NotFound` when `id` does not exist.
    async fn update(&self, id: PostId, post: Post) -> DomainResult<Post>;

    /// Fails with `NotFound` when `id` does not exist.
    async fn delete(&self, id: PostId) -> DomainResult<()>;

    /// `exclude_id` lets an update check against all *other* posts.
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<PostId>) -> DomainResult<bool>;
}

/// Find-or-create access to the tag table. Centralizes tag materialization
/// so use cases never mint tag rows inline.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_or_create(&self, slug_text: &str) -> DomainResult<Tag>;
}
