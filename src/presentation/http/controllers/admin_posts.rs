// src/presentation/http/controllers/admin_posts.rs
use crate::application::{
    commands::posts::SetPublishStateCommand,
    dto::{PagedResult, PostCreateInput, PostDto, PostListItemDto, PostUpdateInput},
    queries::posts::ListAllPostsQuery,
};
use crate::domain::post::PostStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub publish: bool,
}

pub async fn list_all(
    Extension(state): Extension<HttpState>,
    AdminSession(_admin): AdminSession,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<PagedResult<PostListItemDto>>> {
    state
        .services
        .post_queries
        .list_all_posts(ListAllPostsQuery {
            status: params.status,
            search: params.q,
            tag: params.tag,
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    AdminSession(admin): AdminSession,
    Json(payload): Json<PostCreateInput>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let created = state
        .services
        .post_commands
        .create_post(Some(admin.id), payload)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    AdminSession(_admin): AdminSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostUpdateInput>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .update_post(id, payload)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    AdminSession(_admin): AdminSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn remove(
    Extension(state): Extension<HttpState>,
    AdminSession(_admin): AdminSession,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
