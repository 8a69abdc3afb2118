// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::domain::post::PostRepository;

pub struct PostQueryService {
    pub(super) posts: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Page numbers are 1-based; page zero is treated as page one.
    pub(super) fn page_window(page: u32, page_size: u32) -> (u32, u32) {
        let page = page.max(1);
        let offset = (page - 1).saturating_mul(page_size);
        (page, offset)
    }
}
