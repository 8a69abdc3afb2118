// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::SignInCommand,
    dto::{AdminDto, SessionDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminSession, BearerToken};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<SessionDto>> {
    state
        .services
        .auth_commands
        .sign_in(SignInCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<StatusCode> {
    state
        .services
        .auth_commands
        .sign_out(&token)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(AdminSession(admin): AdminSession) -> Json<AdminDto> {
    Json(admin)
}
