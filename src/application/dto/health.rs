use crate::domain::health::{HealthCategory, HealthReport};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReportDto {
    pub score: u8,
    pub category: HealthCategory,
    pub message: String,
}

impl From<HealthReport> for HealthReportDto {
    fn from(report: HealthReport) -> Self {
        Self {
            score: report.score,
            category: report.category,
            message: report.message.to_owned(),
        }
    }
}
