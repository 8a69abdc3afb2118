// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::{PagedResult, PostDto, PostListItemDto},
    queries::posts::ListPublishedPostsQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PublishedListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

pub async fn list_published(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublishedListParams>,
) -> HttpResult<Json<PagedResult<PostListItemDto>>> {
    state
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery {
            search: params.q,
            tag: params.tag,
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    let post = state
        .services
        .post_queries
        .get_published_post_by_slug(&slug)
        .await
        .into_http()?;

    post.map(Json)
        .ok_or_else(|| HttpError::not_found("post not found"))
}
