//! Per-session state — generated datasets and the aid-request ledger.
//!
//! One `SessionState` per interactive session, owned by the engine and
//! passed explicitly — never a module-level singleton. Everything here is
//! in-memory and lost at session end; a multi-client host must give each
//! session its own instance so no two sessions alias the same request
//! ledger.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crisisboard_logic::district::DistrictRecord;
use crisisboard_logic::filter::TierFilter;
use crisisboard_logic::requests::AidRequest;

/// One region's generated records plus their generation timestamp.
///
/// Replaced wholesale on refresh — no record identity carries over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDataset {
    pub records: Vec<DistrictRecord>,
    pub generated_at: DateTime<Utc>,
}

impl RegionDataset {
    pub fn new(records: Vec<DistrictRecord>, generated_at: DateTime<Utc>) -> Self {
        Self {
            records,
            generated_at,
        }
    }

    /// Whether the dataset has outlived the staleness bound.
    /// `None` disables time-based expiry.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => now - self.generated_at >= ttl,
            None => false,
        }
    }

    /// Generation timestamp formatted for display.
    pub fn last_updated(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// All mutable state belonging to one interactive session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Set by a successful login; gates the Approve action and nothing else.
    pub logged_in: bool,
    /// Last generated dataset per region.
    pub datasets: HashMap<String, RegionDataset>,
    /// Append-only request ledger; positional index is identity.
    pub aid_requests: Vec<AidRequest>,
    /// Active urgency filter applied to every projection.
    pub tier_filter: TierFilter,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_at(generated_at: DateTime<Utc>) -> RegionDataset {
        RegionDataset::new(Vec::new(), generated_at)
    }

    #[test]
    fn staleness_respects_ttl() {
        let now = Utc::now();
        let dataset = dataset_at(now - Duration::minutes(31));
        assert!(dataset.is_stale(now, Some(Duration::minutes(30))));
        assert!(!dataset.is_stale(now, Some(Duration::minutes(45))));
    }

    #[test]
    fn no_ttl_never_stale() {
        let now = Utc::now();
        let dataset = dataset_at(now - Duration::days(400));
        assert!(!dataset.is_stale(now, None));
    }

    #[test]
    fn last_updated_format() {
        let at = DateTime::parse_from_rfc3339("2026-08-07T09:30:05Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(dataset_at(at).last_updated(), "2026-08-07 09:30:05");
    }

    #[test]
    fn fresh_session_is_empty_and_logged_out() {
        let session = SessionState::new();
        assert!(!session.logged_in);
        assert!(session.datasets.is_empty());
        assert!(session.aid_requests.is_empty());
        assert_eq!(session.tier_filter, TierFilter::All);
    }
}
