//! Tier-based filtering of district records.

use serde::{Deserialize, Serialize};

use crate::district::DistrictRecord;
use crate::scoring::RecommendationTier;

/// Operator-selected urgency filter. `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TierFilter {
    #[default]
    All,
    Immediate,
    Urgent,
    Monitor,
}

impl TierFilter {
    pub fn all_filters() -> [TierFilter; 4] {
        [
            TierFilter::All,
            TierFilter::Immediate,
            TierFilter::Urgent,
            TierFilter::Monitor,
        ]
    }

    pub fn matches(&self, tier: RecommendationTier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Immediate => tier == RecommendationTier::Immediate,
            TierFilter::Urgent => tier == RecommendationTier::Urgent,
            TierFilter::Monitor => tier == RecommendationTier::Monitor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierFilter::All => "All",
            TierFilter::Immediate => RecommendationTier::Immediate.label(),
            TierFilter::Urgent => RecommendationTier::Urgent.label(),
            TierFilter::Monitor => RecommendationTier::Monitor.label(),
        }
    }
}

/// Order-preserving subsequence of records whose tier matches the filter.
///
/// An empty result is a valid, displayable state — callers distinguish it
/// from "no coordinates available" themselves.
pub fn filter_by_tier(records: &[DistrictRecord], filter: TierFilter) -> Vec<DistrictRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r.recommendation))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::DistrictDraw;
    use crate::scoring::RoadAccess;

    fn record(name: &str, severity: f64, disruption: f64, road: RoadAccess) -> DistrictRecord {
        DistrictRecord::from_draw(
            name,
            None,
            &DistrictDraw {
                weather_severity: severity,
                disruption_index: disruption,
                road_access: road,
                population: 10_000,
            },
        )
    }

    /// One record per tier: scores 0.94, 0.57, 0.47.
    fn mixed_records() -> Vec<DistrictRecord> {
        vec![
            record("Hyderabad", 0.90, 0.95, RoadAccess::Blocked),
            record("Warangal", 0.45, 0.80, RoadAccess::Low),
            record("Medak", 0.20, 0.72, RoadAccess::High),
        ]
    }

    #[test]
    fn all_is_identity() {
        let records = mixed_records();
        let filtered = filter_by_tier(&records, TierFilter::All);
        assert_eq!(filtered, records);
    }

    #[test]
    fn each_tier_filter_leaves_only_matches() {
        let records = mixed_records();
        for filter in TierFilter::all_filters() {
            for r in filter_by_tier(&records, filter) {
                assert!(
                    filter.matches(r.recommendation),
                    "{:?} leaked through {filter:?}",
                    r.recommendation
                );
            }
        }
    }

    #[test]
    fn tier_filters_partition_the_dataset() {
        let records = mixed_records();
        let immediate = filter_by_tier(&records, TierFilter::Immediate).len();
        let urgent = filter_by_tier(&records, TierFilter::Urgent).len();
        let monitor = filter_by_tier(&records, TierFilter::Monitor).len();
        assert_eq!(immediate + urgent + monitor, records.len());
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            record("A", 0.90, 0.95, RoadAccess::Blocked),
            record("B", 0.45, 0.80, RoadAccess::Low),
            record("C", 0.95, 0.98, RoadAccess::Blocked),
        ];
        let filtered = filter_by_tier(&records, TierFilter::Immediate);
        let names: Vec<&str> = filtered.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let records = vec![record("Medak", 0.20, 0.72, RoadAccess::High)];
        assert!(filter_by_tier(&records, TierFilter::Immediate).is_empty());
    }
}
