// src/application/queries/posts/list_published.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PagedResult, PostListItemDto},
        error::ApplicationResult,
    },
    domain::post::PostFilters,
};

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Public listing: published posts only, no status knob to turn.
#[derive(Debug, Clone, Default)]
pub struct ListPublishedPostsQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PostQueryService {
    pub async fn list_published_posts(
        &self,
        query: ListPublishedPostsQuery,
    ) -> ApplicationResult<PagedResult<PostListItemDto>> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let (page, offset) = Self::page_window(query.page.unwrap_or(1), page_size);

        let result = self
            .posts
            .find_published(PostFilters {
                status: None,
                search: query.search,
                tag: query.tag,
                limit: Some(page_size),
                offset: Some(offset),
            })
            .await?;

        Ok(PagedResult::new(
            result.items.into_iter().map(Into::into).collect(),
            result.total,
            page,
            page_size,
        ))
    }
}
