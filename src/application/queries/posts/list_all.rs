// src/application/queries/posts/list_all.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PagedResult, PostListItemDto},
        error::ApplicationResult,
    },
    domain::post::{PostFilters, PostStatus},
};

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Admin listing: drafts included unless a status filter says otherwise.
#[derive(Debug, Clone, Default)]
pub struct ListAllPostsQuery {
    pub status: Option<PostStatus>,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PostQueryService {
    pub async fn list_all_posts(
        &self,
        query: ListAllPostsQuery,
    ) -> ApplicationResult<PagedResult<PostListItemDto>> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let (page, offset) = Self::page_window(query.page.unwrap_or(1), page_size);

        let result = self
            .posts
            .find_all(PostFilters {
                status: query.status,
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
