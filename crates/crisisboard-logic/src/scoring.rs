//! Urgency scoring — flood index, weighted composite score, action tier.
//!
//! Invariants enforced here:
//! - The score is a deterministic pure function of the four draw inputs.
//! - The tier is a deterministic step function of the score alone, with
//!   strict thresholds: a score of exactly 0.70 is Urgent, not Immediate.

use serde::{Deserialize, Serialize};

/// Road accessibility category for a district.
///
/// Sampled during generation as Blocked 40%, Low 20%, Medium 20%, High 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadAccess {
    Blocked,
    Low,
    Medium,
    High,
}

impl RoadAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadAccess::Blocked => "Blocked",
            RoadAccess::Low => "Low",
            RoadAccess::Medium => "Medium",
            RoadAccess::High => "High",
        }
    }
}

/// Scoring weights. Maximum attainable score is their sum: 1.0 exactly.
const W_DISRUPTION: f64 = 0.4;
const W_FLOOD: f64 = 0.2;
const W_WEATHER: f64 = 0.2;
const W_ROAD_BLOCKED: f64 = 0.2;

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Flood index derived from the disruption index: `floor(min(10, d*10))`.
///
/// Evaluated in f64, so two-decimal inputs inherit IEEE 754 artifacts
/// (0.70 * 10 lands just under 7 and floors to 6).
pub fn flood_index(disruption_index: f64) -> u8 {
    (disruption_index * 10.0).min(10.0).floor() as u8
}

/// Weighted urgency composite in [0, 1]:
///
/// `0.4*disruption + 0.2*(flood/10) + 0.2*severity + 0.2 if roads blocked`
pub fn urgency_score(
    weather_severity: f64,
    disruption_index: f64,
    flood_index: u8,
    road_access: RoadAccess,
) -> f64 {
    let road_penalty = if road_access == RoadAccess::Blocked {
        W_ROAD_BLOCKED
    } else {
        0.0
    };
    round2(
        W_DISRUPTION * disruption_index
            + W_FLOOD * (flood_index as f64 / 10.0)
            + W_WEATHER * weather_severity
            + road_penalty,
    )
}

/// Three-level action signal derived from the urgency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    Immediate,
    Urgent,
    Monitor,
}

impl RecommendationTier {
    /// Strict thresholds: > 0.7 Immediate, > 0.5 Urgent, else Monitor.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            RecommendationTier::Immediate
        } else if score > 0.5 {
            RecommendationTier::Urgent
        } else {
            RecommendationTier::Monitor
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationTier::Immediate => "Immediate Deployment",
            RecommendationTier::Urgent => "Urgent Support Required",
            RecommendationTier::Monitor => "Monitor Situation",
        }
    }
}
