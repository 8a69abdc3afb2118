// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::IdGenerator};
use crate::domain::post::{PostRepository, TagRepository};

pub struct PostCommandService {
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl PostCommandService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            posts,
            tags,
            clock,
            ids,
        }
    }

    pub(super) async fn resolve_tags(
        &self,
        tag_slugs: &[String],
    ) -> crate::application::ApplicationResult<Vec<crate::domain::post::Tag>> {
        let mut tags = Vec::with_capacity(tag_slugs.len());
        for slug_text in tag_slugs {
            tags.push(self.tags.find_or_create(slug_text).await?);
        }
        Ok(tags)
    }
}
