// src/application/queries/health.rs
use crate::{
    application::dto::HealthReportDto,
    domain::health::{self, HealthCheckInput},
};

/// Stateless façade over the health-check arithmetic, so the controller
/// talks to a service like everywhere else.
#[derive(Default)]
pub struct HealthQueryService;

impl HealthQueryService {
    pub fn evaluate(&self, input: &HealthCheckInput) -> HealthReportDto {
        health::evaluate(input).into()
    }
}
