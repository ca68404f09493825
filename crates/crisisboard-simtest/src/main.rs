//! Crisisboard Headless Validation Harness
//!
//! Validates scoring logic and reference data without any UI.
//! Runs entirely in-process — no rendering, no prompt loop.
//!
//! Usage:
//!   cargo run -p crisisboard-simtest
//!   cargo run -p crisisboard-simtest -- --verbose

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crisisboard_core::engine::{DashboardEngine, EngineConfig, LoginOutcome};
use crisisboard_core::generation::generate_district_records;
use crisisboard_core::projection::{HeatmapProjection, MapProjection};
use crisisboard_core::reference::{CoordinateTable, DistrictCatalog};
use crisisboard_core::session::RegionDataset;
use crisisboard_logic::filter::{filter_by_tier, TierFilter};
use crisisboard_logic::requests::{ApproveOutcome, RequestStatus, SubmitOutcome};
use crisisboard_logic::resources::ResourceNeeds;
use crisisboard_logic::scoring::{flood_index, urgency_score, RecommendationTier, RoadAccess};

// ── Reference data (same CSVs the CLI loads from disk) ──────────────────
const COORDS_CSV: &str = include_str!("../../../data/state_district_coordinates.csv");
const CATALOG_CSV: &str = include_str!("../../../data/state_districts.csv");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Crisisboard Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Reference data validation
    results.extend(validate_reference_data(verbose));

    // 2. Scoring formula and tier thresholds
    results.extend(validate_scoring(verbose));

    // 3. Scenario generation sweep
    results.extend(validate_generation(verbose));

    // 4. Filtering and resource derivation
    results.extend(validate_filter_and_resources(verbose));

    // 5. Request workflow state machine
    results.extend(validate_workflow(verbose));

    // 6. Projections
    results.extend(validate_projections(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load_reference() -> (CoordinateTable, DistrictCatalog) {
    let coords = CoordinateTable::from_reader(COORDS_CSV.as_bytes())
        .expect("bundled coordinate CSV must parse");
    let catalog = DistrictCatalog::from_reader(CATALOG_CSV.as_bytes())
        .expect("bundled catalog CSV must parse");
    (coords, catalog)
}

fn engine_with_seed(seed: u64) -> DashboardEngine {
    let (coords, catalog) = load_reference();
    DashboardEngine::new(
        coords,
        catalog,
        EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        },
    )
}

// ── 1. Reference Data ───────────────────────────────────────────────────

fn validate_reference_data(verbose: bool) -> Vec<TestResult> {
    println!("--- Reference Data ---");
    let mut results = Vec::new();

    let (coords, mut catalog) = load_reference();

    let regions = catalog.regions();
    results.push(TestResult {
        name: "catalog_six_regions".into(),
        passed: regions.len() == 6,
        detail: format!("{} regions: {}", regions.len(), regions.join(", ")),
    });

    let mut small_regions = Vec::new();
    for region in &regions {
        if catalog.districts(region).len() < 8 {
            small_regions.push(region.clone());
        }
    }
    results.push(TestResult {
        name: "catalog_region_sizes".into(),
        passed: small_regions.is_empty(),
        detail: if small_regions.is_empty() {
            "every region has at least 8 districts".into()
        } else {
            format!("undersized regions: {}", small_regions.join(", "))
        },
    });

    // Coordinates plausibly inside India
    let mut out_of_bounds = 0;
    for region in &regions {
        for district in catalog.districts(region).to_vec() {
            if let Some((lat, lon)) = coords.lookup(&district) {
                if !(6.0..=38.0).contains(&lat) || !(68.0..=98.0).contains(&lon) {
                    out_of_bounds += 1;
                }
            }
        }
    }
    results.push(TestResult {
        name: "coords_within_bounds".into(),
        passed: out_of_bounds == 0,
        detail: format!("{} coordinates outside lat 6–38 / lon 68–98", out_of_bounds),
    });

    // The degraded path must be reachable with shipped data: at least one
    // catalog district has no coordinates.
    let mut unpositioned = Vec::new();
    for region in &regions {
        for district in catalog.districts(region).to_vec() {
            if coords.lookup(&district).is_none() {
                unpositioned.push(district);
            }
        }
    }
    results.push(TestResult {
        name: "coords_known_gap".into(),
        passed: !unpositioned.is_empty(),
        detail: format!("districts without coordinates: {}", unpositioned.join(", ")),
    });

    if verbose {
        println!("  District counts per region:");
        for region in &regions {
            println!("    {:12} {}", region, catalog.districts(region).len());
        }
    }

    results
}

// ── 2. Scoring ──────────────────────────────────────────────────────────

fn validate_scoring(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scoring ---");
    let mut results = Vec::new();

    // Score stays in [0,1] over an input grid
    let mut all_in_range = true;
    for sev_step in 0..=10 {
        for dis_step in 0..=6 {
            for road in [
                RoadAccess::Blocked,
                RoadAccess::Low,
                RoadAccess::Medium,
                RoadAccess::High,
            ] {
                let severity = sev_step as f64 / 10.0;
                let disruption = 0.7 + dis_step as f64 * 0.05;
                let score = urgency_score(severity, disruption, flood_index(disruption), road);
                if !(0.0..=1.0).contains(&score) {
                    all_in_range = false;
                }
            }
        }
    }
    results.push(TestResult {
        name: "score_grid_in_range".into(),
        passed: all_in_range,
        detail: "308 input combinations stayed in [0,1]".into(),
    });

    // Tier thresholds are strict
    let t70 = RecommendationTier::from_score(0.70);
    let t71 = RecommendationTier::from_score(0.71);
    let t50 = RecommendationTier::from_score(0.50);
    let t51 = RecommendationTier::from_score(0.51);
    results.push(TestResult {
        name: "tier_thresholds_strict".into(),
        passed: t70 == RecommendationTier::Urgent
            && t71 == RecommendationTier::Immediate
            && t50 == RecommendationTier::Monitor
            && t51 == RecommendationTier::Urgent,
        detail: format!("0.70→{t70:?} 0.71→{t71:?} 0.50→{t50:?} 0.51→{t51:?}"),
    });

    // Reference vector: disruption 0.90, severity 0.50, roads blocked
    let flood = flood_index(0.90);
    let score = urgency_score(0.50, 0.90, flood, RoadAccess::Blocked);
    results.push(TestResult {
        name: "scoring_reference_vector".into(),
        passed: flood == 9
            && score == 0.84
            && RecommendationTier::from_score(score) == RecommendationTier::Immediate,
        detail: format!("flood={flood} score={score} → {:?}", RecommendationTier::from_score(score)),
    });

    results
}

// ── 3. Generation ───────────────────────────────────────────────────────

fn validate_generation(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenario Generation ---");
    let mut results = Vec::new();

    let (coords, mut catalog) = load_reference();
    let districts = catalog.districts("Maharashtra").to_vec();

    // Determinism: same seed, same dataset
    let a = generate_district_records(&districts, &coords, &mut StdRng::seed_from_u64(42));
    let b = generate_district_records(&districts, &coords, &mut StdRng::seed_from_u64(42));
    results.push(TestResult {
        name: "generation_deterministic".into(),
        passed: a == b,
        detail: format!("{} records identical across same-seed runs", a.len()),
    });

    // Value ranges over a large sweep
    let many: Vec<String> = (0..500).map(|i| format!("D{i}")).collect();
    let records =
        generate_district_records(&many, &CoordinateTable::default(), &mut StdRng::seed_from_u64(7));
    let mut bad = 0;
    for r in &records {
        let ok = (0.0..=1.0).contains(&r.weather_severity)
            && (0.7..=1.0).contains(&r.disruption_index)
            && r.flood_index <= 10
            && (0.0..=1.0).contains(&r.urgency_score)
            && (5000..=20_000).contains(&r.population)
            && r.recommendation == RecommendationTier::from_score(r.urgency_score);
        if !ok {
            bad += 1;
        }
    }
    results.push(TestResult {
        name: "generation_value_ranges".into(),
        passed: bad == 0,
        detail: format!("{bad}/500 records out of range"),
    });

    // Road distribution roughly matches the 40/20/20/20 weights
    let blocked = records
        .iter()
        .filter(|r| r.road_access == RoadAccess::Blocked)
        .count();
    let share = blocked as f64 / records.len() as f64;
    results.push(TestResult {
        name: "generation_road_distribution".into(),
        passed: (0.32..=0.48).contains(&share),
        detail: format!("{:.1}% blocked (expect ~40%)", share * 100.0),
    });

    // Degraded coordinates: Shahdara generates without a position
    let delhi = catalog.districts("Delhi").to_vec();
    let delhi_records =
        generate_district_records(&delhi, &coords, &mut StdRng::seed_from_u64(1));
    let shahdara = delhi_records.iter().find(|r| r.district == "Shahdara");
    results.push(TestResult {
        name: "generation_missing_coords_degrade".into(),
        passed: shahdara.is_some_and(|r| !r.has_position()),
        detail: "Shahdara record produced without a map position".into(),
    });

    if verbose {
        let mut by_tier = [0usize; 3];
        for r in &records {
            match r.recommendation {
                RecommendationTier::Immediate => by_tier[0] += 1,
                RecommendationTier::Urgent => by_tier[1] += 1,
                RecommendationTier::Monitor => by_tier[2] += 1,
            }
        }
        println!(
            "  Tier distribution over 500 records: {} immediate, {} urgent, {} monitor",
            by_tier[0], by_tier[1], by_tier[2]
        );
    }

    results
}

// ── 4. Filtering & Resources ────────────────────────────────────────────

fn validate_filter_and_resources(_verbose: bool) -> Vec<TestResult> {
    println!("--- Filtering & Resources ---");
    let mut results = Vec::new();

    let (coords, mut catalog) = load_reference();
    let districts = catalog.districts("Tamil Nadu").to_vec();
    let records = generate_district_records(&districts, &coords, &mut StdRng::seed_from_u64(21));

    // All is the identity filter
    let all = filter_by_tier(&records, TierFilter::All);
    results.push(TestResult {
        name: "filter_all_identity".into(),
        passed: all == records,
        detail: format!("{} records unchanged", all.len()),
    });

    // Tier filters partition the dataset and leak nothing
    let immediate = filter_by_tier(&records, TierFilter::Immediate);
    let urgent = filter_by_tier(&records, TierFilter::Urgent);
    let monitor = filter_by_tier(&records, TierFilter::Monitor);
    let leaks = immediate
        .iter()
        .any(|r| r.recommendation != RecommendationTier::Immediate)
        || urgent
            .iter()
            .any(|r| r.recommendation != RecommendationTier::Urgent)
        || monitor
            .iter()
            .any(|r| r.recommendation != RecommendationTier::Monitor);
    results.push(TestResult {
        name: "filter_partitions".into(),
        passed: !leaks && immediate.len() + urgent.len() + monitor.len() == records.len(),
        detail: format!(
            "{} = {} + {} + {}",
            records.len(),
            immediate.len(),
            urgent.len(),
            monitor.len()
        ),
    });

    // Needs monotone in urgency and population
    let low = ResourceNeeds::from_parts(0.3, 10_000);
    let high = ResourceNeeds::from_parts(0.9, 10_000);
    let small = ResourceNeeds::from_parts(0.6, 6000);
    let large = ResourceNeeds::from_parts(0.6, 18_000);
    results.push(TestResult {
        name: "needs_monotone".into(),
        passed: high.food >= low.food
            && high.shelter >= low.shelter
            && high.medical >= low.medical
            && large.food >= small.food
            && large.shelter >= small.shelter
            && large.medical >= small.medical,
        detail: format!(
            "urgency 0.3→0.9 food {}→{}, population 6k→18k food {}→{}",
            low.food, high.food, small.food, large.food
        ),
    });

    results
}

// ── 5. Request Workflow ─────────────────────────────────────────────────

fn validate_workflow(_verbose: bool) -> Vec<TestResult> {
    println!("--- Request Workflow ---");
    let mut results = Vec::new();

    let mut engine = engine_with_seed(5);
    engine.select_region("Telangana");

    // Submission appends exactly one pending record
    let submitted = engine.submit_request("Telangana", "Hyderabad", "food");
    results.push(TestResult {
        name: "workflow_submit".into(),
        passed: submitted == SubmitOutcome::Submitted { index: 0 }
            && engine.requests_view().len() == 1
            && engine.requests_view()[0].status == RequestStatus::Pending,
        detail: format!("{submitted:?}"),
    });

    // Empty aid type and foreign districts are rejected as no-ops
    let empty = engine.submit_request("Telangana", "Hyderabad", "  ");
    let foreign = engine.submit_request("Telangana", "Chennai", "food");
    results.push(TestResult {
        name: "workflow_submit_rejections".into(),
        passed: empty == SubmitOutcome::EmptyAidType
            && foreign == SubmitOutcome::UnknownDistrict
            && engine.requests_view().len() == 1,
        detail: format!("empty→{empty:?} foreign→{foreign:?}"),
    });

    // Approval gated on login
    let unauth = engine.approve_request(0);
    results.push(TestResult {
        name: "workflow_approve_needs_login".into(),
        passed: unauth == ApproveOutcome::NotLoggedIn
            && engine.requests_view()[0].status == RequestStatus::Pending,
        detail: format!("{unauth:?}, status unchanged"),
    });

    // Login accepts any non-empty pair, then approval is one-way
    let login = engine.login("ngo_admin", "whatever");
    let first = engine.approve_request(0);
    let second = engine.approve_request(0);
    let missing = engine.approve_request(99);
    results.push(TestResult {
        name: "workflow_approve_idempotent".into(),
        passed: login
            == LoginOutcome::LoggedIn {
                username: "ngo_admin".into(),
            }
            && first == ApproveOutcome::Approved
            && second == ApproveOutcome::AlreadyApproved
            && missing == ApproveOutcome::NotFound
            && engine.pending_requests().is_empty(),
        detail: format!("{first:?} then {second:?}, #99→{missing:?}"),
    });

    results
}

// ── 6. Projections ──────────────────────────────────────────────────────

fn validate_projections(_verbose: bool) -> Vec<TestResult> {
    println!("--- Projections ---");
    let mut results = Vec::new();

    let mut engine = engine_with_seed(13);
    engine.select_region("Delhi");

    // Table view carries the filtered count and timestamp
    let table = engine.table_view("Delhi");
    results.push(TestResult {
        name: "projection_table".into(),
        passed: table
            .as_ref()
            .is_some_and(|t| t.total_districts == t.rows.len() && !t.last_updated.is_empty()),
        detail: table
            .as_ref()
            .map_or("missing".into(), |t| {
                format!("{} rows as of {}", t.total_districts, t.last_updated)
            }),
    });

    // Map excludes the unpositioned district but keeps it in the table
    let map = engine.map_view("Delhi");
    let table_len = engine.table_view("Delhi").map_or(0, |t| t.rows.len());
    let map_ok = match &map {
        Some(MapProjection::Points { points, .. }) => {
            points.len() == table_len - 1
                && points.iter().all(|p| p.district != "Shahdara")
        }
        _ => false,
    };
    results.push(TestResult {
        name: "projection_map_excludes_unpositioned".into(),
        passed: map_ok,
        detail: format!("{} table rows, Shahdara absent from map", table_len),
    });

    // Chart tier counts sum to the row count
    let chart = engine.chart_view("Delhi");
    results.push(TestResult {
        name: "projection_chart_counts".into(),
        passed: chart.as_ref().is_some_and(|c| {
            c.tier_counts.immediate + c.tier_counts.urgent + c.tier_counts.monitor == c.bars.len()
                && c.ranking.windows(2).all(|w| w[0].urgency_score >= w[1].urgency_score)
        }),
        detail: "tier counts sum to bar count, ranking descending".into(),
    });

    // Heatmap gating across filter states
    let full = engine.heatmap_view("Delhi");
    let full_ready = matches!(full, Some(HeatmapProjection::Ready { .. }));
    results.push(TestResult {
        name: "projection_heatmap_ready".into(),
        passed: full_ready,
        detail: "unfiltered Delhi dataset has ≥2 districts".into(),
    });

    // Staleness: an aged dataset regenerates on select
    let aged = Utc::now() - Duration::minutes(31);
    if let Some(dataset) = engine.session.datasets.get_mut("Delhi") {
        dataset.generated_at = aged;
    }
    let before: Option<RegionDataset> = engine.dataset("Delhi").cloned();
    engine.select_region("Delhi");
    let after = engine.dataset("Delhi").cloned();
    results.push(TestResult {
        name: "projection_ttl_refresh".into(),
        passed: match (&before, &after) {
            (Some(b), Some(a)) => a.generated_at > b.generated_at && a.records != b.records,
            _ => false,
        },
        detail: "aged dataset replaced on select".into(),
    });

    results
}
