// src/presentation/http/extractors.rs
use crate::{
    application::dto::AdminDto,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Raw bearer token, for the handlers that operate on the session itself.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// An authenticated admin. Admin gating happens here, at the routing
/// boundary; the use cases behind it trust their caller.
#[derive(Debug, Clone)]
pub struct AdminSession(pub AdminDto);

fn bearer_token(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
        .ok_or_else(|| HttpError::unauthorized("missing Authorization header"))
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts).map(Self)
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(crate::application::error::ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let token = bearer_token(parts)?;
        let admin = app_state
            .services
            .auth_queries
            .current_admin(&token)
            .await
            .map_err(HttpError::from_error)?
            .ok_or_else(|| HttpError::unauthorized("invalid or expired session"))?;

        Ok(Self(admin))
    }
}
