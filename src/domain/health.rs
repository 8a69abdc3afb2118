// src/domain/health.rs
//! Financial health check: a four-factor weighted score over monthly
//! margin, cash runway, administrative controls, and whether the business
//! is billing at all.

use serde::{Deserialize, Serialize};

/// Months of cash runway, bracketed the way the intake form asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Runway {
    #[serde(rename = "0-1")]
    ZeroToOne,
    #[serde(rename = "2-3")]
    TwoToThree,
    #[serde(rename = "4-6")]
    FourToSix,
    #[serde(rename = "7+")]
    SevenPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlLevel {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HealthCheckInput {
    pub monthly_revenue: f64,
    pub margin_pct: f64,
    pub runway: Runway,
    pub controls: ControlLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Critical,
    AtRisk,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub score: u8,
    pub category: HealthCategory,
    pub message: &'static str,
}

/// Score out of 100: margin (capped at 60%) weighs 30 points, runway 35,
/// controls 25, and any positive revenue 10.
pub fn evaluate(input: &HealthCheckInput) -> HealthReport {
    let margin = input.margin_pct.clamp(0.0, 60.0);
    let mut score = (margin / 60.0) * 30.0;

    score += match input.runway {
        Runway::ZeroToOne => 0.0,
        Runway::TwoToThree => 15.0,
        Runway::FourToSix => 25.0,
        Runway::SevenPlus => 35.0,
    };

    score += match input.controls {
        ControlLevel::None => 0.0,
        ControlLevel::Partial => 10.0,
        ControlLevel::Full => 25.0,
    };

    if input.monthly_revenue > 0.0 {
        score += 10.0;
    }

    let score = score.round().clamp(0.0, 100.0) as u8;

    let (category, message) = if score < 40 {
        (
            HealthCategory::Critical,
            "Book a working session now, before the lack of control costs you cash and taxes.",
        )
    } else if score < 70 {
        (
            HealthCategory::AtRisk,
            "There are warning signs. Tax and financial planning can save you expensive decisions.",
        )
    } else {
        (
            HealthCategory::Stable,
            "You are doing well, but strategy and controls can still buy predictability and margin.",
        )
    };

    HealthReport {
        score,
        category,
        message,
    }
}
