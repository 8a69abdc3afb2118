// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin_posts, auth, health, posts};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(parse_origins(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health::probe))
        .route("/api/v1/health-check", post(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/posts", get(posts::list_published))
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_by_slug))
        .route(
            "/api/v1/admin/posts",
            get(admin_posts::list_all).post(admin_posts::create),
        )
        .route(
            "/api/v1/admin/posts/{id}",
            put(admin_posts::update).delete(admin_posts::remove),
        )
        .route(
            "/api/v1/admin/posts/{id}/publish",
            post(admin_posts::set_publish_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

fn parse_origins(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    AllowOrigin::list(origins)
}
