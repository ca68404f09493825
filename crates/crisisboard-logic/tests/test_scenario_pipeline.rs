//! Integration tests for the full scoring pipeline.
//!
//! Exercises: DistrictDraw → DistrictRecord → TierFilter → ResourceNeeds
//! → aid-request workflow.
//!
//! All tests are pure logic — no randomness, no IO, no rendering.

use crisisboard_logic::district::{DistrictDraw, DistrictRecord};
use crisisboard_logic::filter::{filter_by_tier, TierFilter};
use crisisboard_logic::requests::{
    approve, pending, submit, ApproveOutcome, RequestStatus, SubmitOutcome,
};
use crisisboard_logic::resources::{total_demand, ResourceNeeds};
use crisisboard_logic::scoring::{RecommendationTier, RoadAccess};

// ── Helpers ────────────────────────────────────────────────────────────

fn record(name: &str, severity: f64, disruption: f64, road: RoadAccess) -> DistrictRecord {
    DistrictRecord::from_draw(
        name,
        Some((17.0, 78.0)),
        &DistrictDraw {
            weather_severity: severity,
            disruption_index: disruption,
            road_access: road,
            population: 10_000,
        },
    )
}

/// A small region spanning all three tiers.
fn region() -> Vec<DistrictRecord> {
    vec![
        record("Hyderabad", 0.90, 0.95, RoadAccess::Blocked), // 0.94 Immediate
        record("Warangal", 0.45, 0.80, RoadAccess::Low),      // 0.57 Urgent
        record("Nizamabad", 0.75, 0.92, RoadAccess::Blocked), // 0.90 Immediate
        record("Medak", 0.20, 0.72, RoadAccess::High),        // 0.47 Monitor
    ]
}

// ── Pipeline coherence ─────────────────────────────────────────────────

#[test]
fn every_record_scores_within_bounds() {
    for r in region() {
        assert!((0.0..=1.0).contains(&r.urgency_score), "{r:?}");
        assert!(r.flood_index <= 10, "{r:?}");
        assert_eq!(r.recommendation, RecommendationTier::from_score(r.urgency_score));
    }
}

#[test]
fn filter_then_derive_needs() {
    let records = region();
    let immediate = filter_by_tier(&records, TierFilter::Immediate);
    assert_eq!(immediate.len(), 2);

    let demand = total_demand(&immediate);
    let by_hand: u32 = immediate
        .iter()
        .map(|r| ResourceNeeds::for_record(r).medical)
        .sum();
    assert_eq!(demand.medical, by_hand);
    assert!(demand.food > demand.shelter, "food scaling is the largest");
}

#[test]
fn higher_urgency_district_needs_more_of_everything() {
    let records = region();
    let hot = ResourceNeeds::for_record(&records[0]); // 0.94
    let calm = ResourceNeeds::for_record(&records[3]); // 0.47
    assert!(hot.food > calm.food);
    assert!(hot.shelter > calm.shelter);
    assert!(hot.medical > calm.medical);
}

// ── Workflow over a generated region ───────────────────────────────────

#[test]
fn submit_and_approve_against_region_districts() {
    let records = region();
    let names: Vec<&str> = records.iter().map(|r| r.district.as_str()).collect();

    let mut requests = Vec::new();
    assert_eq!(
        submit(&mut requests, &names, "Hyderabad", "food"),
        SubmitOutcome::Submitted { index: 0 }
    );
    assert_eq!(
        submit(&mut requests, &names, "Bengaluru", "food"),
        SubmitOutcome::UnknownDistrict,
        "districts of another region are not submittable"
    );

    // Approval gated on login, then one-way.
    assert_eq!(approve(&mut requests, 0, false), ApproveOutcome::NotLoggedIn);
    assert_eq!(requests[0].status, RequestStatus::Pending);
    assert_eq!(approve(&mut requests, 0, true), ApproveOutcome::Approved);
    assert_eq!(approve(&mut requests, 0, true), ApproveOutcome::AlreadyApproved);
    assert!(pending(&requests).is_empty());
}

#[test]
fn workflow_survives_dataset_replacement() {
    // Requests are session-scoped, not dataset-scoped: replacing a region's
    // records must not touch the ledger.
    let records = region();
    let names: Vec<&str> = records.iter().map(|r| r.district.as_str()).collect();
    let mut requests = Vec::new();
    submit(&mut requests, &names, "Warangal", "shelter");

    let regenerated = region(); // fresh records, same catalog
    assert_ne!(
        records.as_ptr(),
        regenerated.as_ptr(),
        "regeneration produces a new sequence"
    );
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].region, "Warangal");
}
