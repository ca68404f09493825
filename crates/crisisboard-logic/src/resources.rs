//! Resource-need derivation — food/shelter/medical units from urgency and
//! population.
//!
//! Needs are computed on read, never stored on the record, and each is an
//! independent linear scaling of `urgency_score * population`. No
//! cross-district normalization against the configured capacity totals is
//! performed; the capacities are pass-through configuration (see
//! [`CapacityConfig`]).

use serde::{Deserialize, Serialize};

use crate::district::DistrictRecord;

/// Scaling factor applied to `urgency * population` per resource kind.
mod scale {
    pub const FOOD: f64 = 0.02;
    pub const SHELTER: f64 = 0.01;
    pub const MEDICAL: f64 = 0.015;
}

/// Derived resource demand, in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceNeeds {
    pub food: u32,
    pub shelter: u32,
    pub medical: u32,
}

impl ResourceNeeds {
    /// Needs for one record. Monotonically non-decreasing in both urgency
    /// score and population.
    pub fn for_record(record: &DistrictRecord) -> Self {
        Self::from_parts(record.urgency_score, record.population)
    }

    pub fn from_parts(urgency_score: f64, population: u32) -> Self {
        let base = urgency_score * population as f64;
        Self {
            food: (base * scale::FOOD).floor() as u32,
            shelter: (base * scale::SHELTER).floor() as u32,
            medical: (base * scale::MEDICAL).floor() as u32,
        }
    }
}

/// Aggregate demand across a set of records.
///
/// Display only — never checked against the configured capacities.
pub fn total_demand(records: &[DistrictRecord]) -> ResourceNeeds {
    records
        .iter()
        .map(ResourceNeeds::for_record)
        .fold(ResourceNeeds::default(), |acc, n| ResourceNeeds {
            food: acc.food + n.food,
            shelter: acc.shelter + n.shelter,
            medical: acc.medical + n.medical,
        })
}

/// Relief capacity totals accepted from the operator sidebar.
///
/// Pass-through configuration: surfaced in views verbatim, consumed by no
/// computation in this crate or the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    pub total_food_units: u32,
    pub total_medical_kits: u32,
    pub total_shelter_units: u32,
}

impl CapacityConfig {
    pub const MAX_FOOD_UNITS: u32 = 100_000;
    pub const MAX_MEDICAL_KITS: u32 = 10_000;
    pub const MAX_SHELTER_UNITS: u32 = 10_000;

    /// Clamp each total to its accepted input bound.
    pub fn clamped(self) -> Self {
        Self {
            total_food_units: self.total_food_units.min(Self::MAX_FOOD_UNITS),
            total_medical_kits: self.total_medical_kits.min(Self::MAX_MEDICAL_KITS),
            total_shelter_units: self.total_shelter_units.min(Self::MAX_SHELTER_UNITS),
        }
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            total_food_units: 5000,
            total_medical_kits: 1000,
            total_shelter_units: 500,
        }
    }
}
