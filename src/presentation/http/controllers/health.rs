// src/presentation/http/controllers/health.rs
use crate::application::dto::HealthReportDto;
use crate::domain::health::HealthCheckInput;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn probe() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

pub async fn health_check(
    Extension(state): Extension<HttpState>,
    Json(input): Json<HealthCheckInput>,
) -> Json<HealthReportDto> {
    Json(state.services.health.evaluate(&input))
}
