//! Per-district records — raw draw inputs and the derived, scored record.

use serde::{Deserialize, Serialize};

use crate::scoring::{flood_index, urgency_score, RecommendationTier, RoadAccess};

/// The four independent random inputs for one district, before derivation.
///
/// The engine crate fills this from its randomness source; tests construct
/// it directly to pin exact scoring vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistrictDraw {
    /// Weather severity in [0, 1], two decimals.
    pub weather_severity: f64,
    /// Disruption index in [0.7, 1.0], two decimals.
    pub disruption_index: f64,
    pub road_access: RoadAccess,
    /// Affected population in [5000, 20000].
    pub population: u32,
}

/// One scored district for one generation cycle.
///
/// Immutable once built. Resource needs are derived on read
/// (see [`crate::resources`]), never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    pub district: String,
    /// None when the district is absent from the coordinate table; the
    /// record is still valid, it just cannot be placed on a map.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather_severity: f64,
    pub disruption_index: f64,
    /// Derived: `floor(min(10, disruption_index * 10))`.
    pub flood_index: u8,
    pub road_access: RoadAccess,
    /// Derived weighted composite in [0, 1].
    pub urgency_score: f64,
    /// Derived from `urgency_score` alone.
    pub recommendation: RecommendationTier,
    pub population: u32,
}

impl DistrictRecord {
    /// Build a record from a draw, deriving flood index, urgency score, and
    /// recommendation tier.
    pub fn from_draw(
        district: impl Into<String>,
        position: Option<(f64, f64)>,
        draw: &DistrictDraw,
    ) -> Self {
        let flood = flood_index(draw.disruption_index);
        let score = urgency_score(
            draw.weather_severity,
            draw.disruption_index,
            flood,
            draw.road_access,
        );
        Self {
            district: district.into(),
            latitude: position.map(|(lat, _)| lat),
            longitude: position.map(|(_, lon)| lon),
            weather_severity: draw.weather_severity,
            disruption_index: draw.disruption_index,
            flood_index: flood,
            road_access: draw.road_access,
            urgency_score: score,
            recommendation: RecommendationTier::from_score(score),
            population: draw.population,
        }
    }

    /// Whether the record can appear in map projections.
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(severity: f64, disruption: f64, road: RoadAccess, population: u32) -> DistrictDraw {
        DistrictDraw {
            weather_severity: severity,
            disruption_index: disruption,
            road_access: road,
            population,
        }
    }

    #[test]
    fn derivations_match_scoring_functions() {
        let d = draw(0.50, 0.90, RoadAccess::Blocked, 12_000);
        let record = DistrictRecord::from_draw("Hyderabad", Some((17.385, 78.4867)), &d);
        assert_eq!(record.flood_index, 9);
        assert_eq!(record.urgency_score, 0.84);
        assert_eq!(record.recommendation, RecommendationTier::Immediate);
        assert_eq!(record.population, 12_000);
    }

    #[test]
    fn position_is_split_into_lat_lon() {
        let d = draw(0.1, 0.7, RoadAccess::High, 5000);
        let record = DistrictRecord::from_draw("Warangal", Some((17.9689, 79.5941)), &d);
        assert_eq!(record.latitude, Some(17.9689));
        assert_eq!(record.longitude, Some(79.5941));
        assert!(record.has_position());
    }

    #[test]
    fn missing_position_still_produces_a_record() {
        let d = draw(0.9, 1.0, RoadAccess::Blocked, 20_000);
        let record = DistrictRecord::from_draw("Shahdara", None, &d);
        assert!(!record.has_position());
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
        // Scoring is unaffected by the missing coordinates.
        assert_eq!(record.urgency_score, 1.0);
    }
}
