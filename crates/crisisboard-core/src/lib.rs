//! Crisisboard Core - Crisis Coordination Engine
//!
//! Synthesizes per-district disaster metrics for a selected region, scores
//! them, and exposes read-only projections (tables, chart series, map
//! points, heatmap readiness) plus an aid-request/approval workflow.
//!
//! # Architecture
//!
//! - **Reference data**: district coordinates and the state→district
//!   catalog, loaded once from CSV at startup.
//! - **Generation**: one synthetic record per district, drawn from a
//!   caller-visible randomness source and scored by `crisisboard-logic`.
//! - **Session**: per-session state (datasets, request ledger, login flag),
//!   owned by an explicit engine instance — never a global.
//! - **Projections**: the presentation boundary; renderers consume these
//!   and dispatch the six actions back onto the engine.
//!
//! # Example
//!
//! ```rust,no_run
//! use crisisboard_core::prelude::*;
//!
//! let coords = CoordinateTable::load("data/state_district_coordinates.csv")?;
//! let catalog = DistrictCatalog::load("data/state_districts.csv")?;
//! let mut engine = DashboardEngine::new(coords, catalog, EngineConfig::default());
//!
//! engine.select_region("Telangana");
//! let table = engine.table_view("Telangana").unwrap();
//! println!("{} districts as of {}", table.total_districts, table.last_updated);
//! # Ok::<(), crisisboard_core::reference::ReferenceError>(())
//! ```

pub mod engine;
pub mod generation;
pub mod projection;
pub mod reference;
pub mod session;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{DashboardEngine, EngineConfig, LoginOutcome};
    pub use crate::projection::{HeatmapProjection, MapProjection};
    pub use crate::reference::{CoordinateTable, DistrictCatalog};
    pub use crate::session::{RegionDataset, SessionState};
    pub use crisisboard_logic::district::DistrictRecord;
    pub use crisisboard_logic::filter::TierFilter;
    pub use crisisboard_logic::requests::{ApproveOutcome, SubmitOutcome};
    pub use crisisboard_logic::scoring::{RecommendationTier, RoadAccess};
}
