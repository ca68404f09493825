//! Dashboard engine — owns the reference data, one session, and the
//! action surface.
//!
//! One engine per interactive session. Every action handler is synchronous
//! and atomic with respect to the triggering user action; recoverable
//! conditions come back as outcome values for the renderer to message,
//! never as panics.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crisisboard_logic::district::DistrictRecord;
use crisisboard_logic::filter::{filter_by_tier, TierFilter};
use crisisboard_logic::requests::{self, AidRequest, ApproveOutcome, SubmitOutcome};
use crisisboard_logic::resources::CapacityConfig;

use crate::generation::generate_district_records;
use crate::projection::{
    heatmap_projection, map_projection, priority_table, urgency_chart, DistrictTable,
    HeatmapProjection, MapProjection, PriorityTable, UrgencyChart,
};
use crate::reference::{CoordinateTable, DistrictCatalog};
use crate::session::{RegionDataset, SessionState};

/// Session-level engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Seed for scenario generation (None = seed from entropy).
    pub seed: Option<u64>,
    /// Dataset staleness bound; None disables time-based expiry.
    pub dataset_ttl: Option<Duration>,
    /// Configured operator account. Carried for parity with the deployed
    /// configuration; login never compares against it (see
    /// `requests::credentials_accepted`).
    pub username: String,
    pub password: String,
    /// Sidebar capacity totals, passed through to the prioritization view.
    pub capacities: CapacityConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dataset_ttl: Some(Duration::minutes(30)),
            username: "govt_user".to_string(),
            password: "secure123".to_string(),
            capacities: CapacityConfig::default(),
        }
    }
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// The session flag is set; the username is echoed for display.
    LoggedIn { username: String },
    /// Both fields must be non-empty.
    MissingCredentials,
}

/// Per-session coordination engine.
pub struct DashboardEngine {
    coords: CoordinateTable,
    catalog: DistrictCatalog,
    config: EngineConfig,
    rng: StdRng,
    /// Session state; owned here, never shared with another session.
    pub session: SessionState,
}

impl DashboardEngine {
    pub fn new(coords: CoordinateTable, catalog: DistrictCatalog, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::info!(
            "engine ready: {} regions, {} positioned districts",
            catalog.regions().len(),
            coords.len()
        );
        Self {
            coords,
            catalog,
            config,
            rng,
            session: SessionState::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Known regions, in catalog order.
    pub fn regions(&self) -> Vec<String> {
        self.catalog.regions()
    }

    // ── Dataset actions ─────────────────────────────────────────────────

    /// Select a region, generating its dataset if absent or stale.
    pub fn select_region(&mut self, region: &str) -> &RegionDataset {
        let now = Utc::now();
        let stale = self
            .session
            .datasets
            .get(region)
            .map_or(true, |d| d.is_stale(now, self.config.dataset_ttl));
        if stale {
            self.regenerate(region, now);
        }
        &self.session.datasets[region]
    }

    /// Unconditionally regenerate a region's dataset, replacing it wholesale.
    pub fn refresh(&mut self, region: &str) -> &RegionDataset {
        self.regenerate(region, Utc::now());
        &self.session.datasets[region]
    }

    fn regenerate(&mut self, region: &str, now: DateTime<Utc>) {
        let districts = self.catalog.districts(region);
        if districts.is_empty() {
            log::warn!("unknown region {region}; serving an empty dataset");
        }
        let records = generate_district_records(districts, &self.coords, &mut self.rng);
        log::debug!("generated {} records for {region}", records.len());
        self.session
            .datasets
            .insert(region.to_string(), RegionDataset::new(records, now));
    }

    pub fn dataset(&self, region: &str) -> Option<&RegionDataset> {
        self.session.datasets.get(region)
    }

    // ── Filtering ───────────────────────────────────────────────────────

    pub fn set_tier_filter(&mut self, filter: TierFilter) {
        self.session.tier_filter = filter;
    }

    pub fn tier_filter(&self) -> TierFilter {
        self.session.tier_filter
    }

    /// The region's records after applying the session filter.
    /// None until the region has been selected at least once.
    pub fn filtered_records(&self, region: &str) -> Option<Vec<DistrictRecord>> {
        self.dataset(region)
            .map(|d| filter_by_tier(&d.records, self.session.tier_filter))
    }

    // ── Projections ─────────────────────────────────────────────────────

    pub fn table_view(&self, region: &str) -> Option<DistrictTable> {
        let dataset = self.dataset(region)?;
        let rows = filter_by_tier(&dataset.records, self.session.tier_filter);
        Some(DistrictTable {
            region: region.to_string(),
            last_updated: dataset.last_updated(),
            filter: self.session.tier_filter,
            total_districts: rows.len(),
            rows,
        })
    }

    pub fn priority_view(&self, region: &str) -> Option<PriorityTable> {
        let rows = self.filtered_records(region)?;
        Some(priority_table(&rows, self.config.capacities))
    }

    pub fn chart_view(&self, region: &str) -> Option<UrgencyChart> {
        Some(urgency_chart(&self.filtered_records(region)?))
    }

    pub fn map_view(&self, region: &str) -> Option<MapProjection> {
        Some(map_projection(&self.filtered_records(region)?))
    }

    pub fn heatmap_view(&self, region: &str) -> Option<HeatmapProjection> {
        Some(heatmap_projection(&self.filtered_records(region)?))
    }

    // ── Request workflow ────────────────────────────────────────────────

    /// Submit an aid request for a district of the selected region's
    /// current dataset.
    pub fn submit_request(
        &mut self,
        selected_region: &str,
        district: &str,
        aid_type: &str,
    ) -> SubmitOutcome {
        let names: Vec<&str> = self
            .session
            .datasets
            .get(selected_region)
            .map(|d| d.records.iter().map(|r| r.district.as_str()).collect())
            .unwrap_or_default();
        let outcome = requests::submit(&mut self.session.aid_requests, &names, district, aid_type);
        match &outcome {
            SubmitOutcome::Submitted { index } => {
                log::info!("aid request #{index} submitted for {district} ({aid_type})");
            }
            SubmitOutcome::EmptyAidType => log::warn!("submission dropped: empty aid type"),
            SubmitOutcome::UnknownDistrict => {
                log::warn!("submission rejected: {district} is not in the {selected_region} dataset");
            }
        }
        outcome
    }

    /// Approve the request at `index`; gated on the session login flag.
    pub fn approve_request(&mut self, index: usize) -> ApproveOutcome {
        let outcome = requests::approve(
            &mut self.session.aid_requests,
            index,
            self.session.logged_in,
        );
        match outcome {
            ApproveOutcome::Approved => log::info!("aid request #{index} approved"),
            ApproveOutcome::AlreadyApproved => {
                log::debug!("aid request #{index} was already approved")
            }
            ApproveOutcome::NotLoggedIn => {
                log::warn!("approval of request #{index} rejected: not logged in")
            }
            ApproveOutcome::NotFound => log::warn!("approval rejected: no request #{index}"),
        }
        outcome
    }

    /// Set the login flag for the rest of the session.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        if requests::credentials_accepted(username, password) {
            self.session.logged_in = true;
            LoginOutcome::LoggedIn {
                username: username.to_string(),
            }
        } else {
            LoginOutcome::MissingCredentials
        }
    }

    pub fn requests_view(&self) -> &[AidRequest] {
        &self.session.aid_requests
    }

    /// Pending requests with their positional indices (approval panel).
    pub fn pending_requests(&self) -> Vec<(usize, &AidRequest)> {
        requests::pending(&self.session.aid_requests)
    }
}
