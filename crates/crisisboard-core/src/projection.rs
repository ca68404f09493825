//! Read-only projections of session data for rendering.
//!
//! The presentation boundary: renderers consume these views and dispatch
//! actions back onto the engine. Nothing here mutates session state, and
//! resource needs are derived at projection time, never stored.

use serde::{Deserialize, Serialize};

use crisisboard_logic::district::DistrictRecord;
use crisisboard_logic::filter::TierFilter;
use crisisboard_logic::resources::{total_demand, CapacityConfig, ResourceNeeds};
use crisisboard_logic::scoring::RecommendationTier;

/// Fixed point radius for map rendering, in meters.
pub const MAP_POINT_RADIUS_M: u32 = 20_000;
/// Initial map zoom level.
pub const MAP_ZOOM: u8 = 6;

/// District table for the dashboard section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictTable {
    pub region: String,
    /// Generation timestamp, `%Y-%m-%d %H:%M:%S`.
    pub last_updated: String,
    pub filter: TierFilter,
    /// Count after filtering, surfaced alongside every view.
    pub total_districts: usize,
    pub rows: Vec<DistrictRecord>,
}

/// One row of the resource prioritization section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityRow {
    pub district: String,
    pub urgency_score: f64,
    pub population: u32,
    pub needs: ResourceNeeds,
}

/// Resource prioritization view: per-district needs plus the configured
/// capacity totals, echoed for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityTable {
    pub rows: Vec<PriorityRow>,
    pub total_demand: ResourceNeeds,
    /// Pass-through sidebar totals; not compared against demand.
    pub capacities: CapacityConfig,
}

pub fn priority_table(records: &[DistrictRecord], capacities: CapacityConfig) -> PriorityTable {
    PriorityTable {
        rows: records
            .iter()
            .map(|r| PriorityRow {
                district: r.district.clone(),
                urgency_score: r.urgency_score,
                population: r.population,
                needs: ResourceNeeds::for_record(r),
            })
            .collect(),
        total_demand: total_demand(records),
        capacities,
    }
}

/// One bar of a per-district score series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub district: String,
    pub urgency_score: f64,
}

/// Tier value counts for the recommendations summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts {
    pub immediate: usize,
    pub urgent: usize,
    pub monitor: usize,
}

/// Chart series for the dashboard and recommendations sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyChart {
    /// Per-district scores in dataset order (bar chart).
    pub bars: Vec<ChartBar>,
    pub tier_counts: TierCounts,
    /// Scores sorted descending (line chart).
    pub ranking: Vec<ChartBar>,
}

pub fn urgency_chart(records: &[DistrictRecord]) -> UrgencyChart {
    let bars: Vec<ChartBar> = records
        .iter()
        .map(|r| ChartBar {
            district: r.district.clone(),
            urgency_score: r.urgency_score,
        })
        .collect();

    let mut tier_counts = TierCounts::default();
    for r in records {
        match r.recommendation {
            RecommendationTier::Immediate => tier_counts.immediate += 1,
            RecommendationTier::Urgent => tier_counts.urgent += 1,
            RecommendationTier::Monitor => tier_counts.monitor += 1,
        }
    }

    let mut ranking = bars.clone();
    ranking.sort_by(|a, b| {
        b.urgency_score
            .partial_cmp(&a.urgency_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    UrgencyChart {
        bars,
        tier_counts,
        ranking,
    }
}

/// RGBA color by tier: red / orange / green.
pub fn tier_color(tier: RecommendationTier) -> [u8; 4] {
    match tier {
        RecommendationTier::Immediate => [255, 0, 0, 180],
        RecommendationTier::Urgent => [255, 165, 0, 160],
        RecommendationTier::Monitor => [0, 128, 0, 120],
    }
}

/// One positioned district for map rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPoint {
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: [u8; 4],
    pub urgency_score: f64,
    pub recommendation: RecommendationTier,
}

/// Map view over the current filtered records.
///
/// The empty-view and no-coordinates cases are distinct states, messaged
/// separately by renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MapProjection {
    Points {
        /// Mean of the available coordinates.
        center_latitude: f64,
        center_longitude: f64,
        zoom: u8,
        radius_m: u32,
        points: Vec<MapPoint>,
    },
    /// No records in the current view at all.
    Empty,
    /// Records exist, but none carries coordinates.
    NoCoordinates,
}

pub fn map_projection(records: &[DistrictRecord]) -> MapProjection {
    if records.is_empty() {
        return MapProjection::Empty;
    }
    let points: Vec<MapPoint> = records
        .iter()
        .filter_map(|r| {
            let (latitude, longitude) = r.latitude.zip(r.longitude)?;
            Some(MapPoint {
                district: r.district.clone(),
                latitude,
                longitude,
                color: tier_color(r.recommendation),
                urgency_score: r.urgency_score,
                recommendation: r.recommendation,
            })
        })
        .collect();
    if points.is_empty() {
        return MapProjection::NoCoordinates;
    }
    let n = points.len() as f64;
    MapProjection::Points {
        center_latitude: points.iter().map(|p| p.latitude).sum::<f64>() / n,
        center_longitude: points.iter().map(|p| p.longitude).sum::<f64>() / n,
        zoom: MAP_ZOOM,
        radius_m: MAP_POINT_RADIUS_M,
        points,
    }
}

/// Heatmap readiness over the current filtered records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HeatmapProjection {
    Ready { rows: Vec<ChartBar> },
    /// Zero districts after filtering; widening the filter may help.
    NoMatches,
    /// A heatmap needs at least two districts.
    InsufficientData,
}

pub fn heatmap_projection(records: &[DistrictRecord]) -> HeatmapProjection {
    match records.len() {
        0 => HeatmapProjection::NoMatches,
        1 => HeatmapProjection::InsufficientData,
        _ => HeatmapProjection::Ready {
            rows: records
                .iter()
                .map(|r| ChartBar {
                    district: r.district.clone(),
                    urgency_score: r.urgency_score,
                })
                .collect(),
        },
    }
}
