//! Static reference data — district coordinates and the state→district
//! catalog.
//!
//! Both tables are loaded once at startup. A missing or malformed file is
//! fatal; a district missing from the coordinate table is not (the record
//! is produced without a map position).

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Fatal-at-startup reference data failure.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to open reference file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed reference data in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CoordinateRow {
    #[serde(rename = "District")]
    district: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

/// District name → (latitude, longitude).
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    coords: HashMap<String, (f64, f64)>,
}

impl CoordinateTable {
    /// Load from a CSV file with columns `District,Latitude,Longitude`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReferenceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_reader(file).map_err(|source| ReferenceError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
        log::info!(
            "loaded {} district coordinates from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse from any reader (e.g. an embedded CSV).
    pub fn from_reader(reader: impl Read) -> Result<Self, csv::Error> {
        let mut coords = HashMap::new();
        for row in csv::Reader::from_reader(reader).deserialize() {
            let row: CoordinateRow = row?;
            coords.insert(row.district, (row.latitude, row.longitude));
        }
        Ok(Self { coords })
    }

    /// Position for a district, if the reference data has one.
    pub fn lookup(&self, district: &str) -> Option<(f64, f64)> {
        self.coords.get(district).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "District")]
    district: String,
}

/// Region (state) → ordered district list.
///
/// Rows are kept in file order; per-region lists are resolved on first
/// query and cached. An unknown region yields an empty list, not an error.
#[derive(Debug, Clone, Default)]
pub struct DistrictCatalog {
    rows: Vec<(String, String)>,
    by_region: HashMap<String, Vec<String>>,
}

impl DistrictCatalog {
    /// Load from a CSV file with columns `State,District`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReferenceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_reader(file).map_err(|source| ReferenceError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
        log::info!(
            "loaded {} catalog rows from {}",
            catalog.rows.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse from any reader (e.g. an embedded CSV).
    pub fn from_reader(reader: impl Read) -> Result<Self, csv::Error> {
        let mut rows = Vec::new();
        for row in csv::Reader::from_reader(reader).deserialize() {
            let row: CatalogRow = row?;
            rows.push((row.state, row.district));
        }
        Ok(Self {
            rows,
            by_region: HashMap::new(),
        })
    }

    /// Districts of a region, in file order. Cached after the first query.
    pub fn districts(&mut self, region: &str) -> &[String] {
        let Self { rows, by_region } = self;
        by_region
            .entry(region.to_string())
            .or_insert_with(|| {
                rows.iter()
                    .filter(|(state, _)| state == region)
                    .map(|(_, district)| district.clone())
                    .collect()
            })
            .as_slice()
    }

    /// Known regions, deduplicated, in file order.
    pub fn regions(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for (state, _) in &self.rows {
            if !seen.contains(state) {
                seen.push(state.clone());
            }
        }
        seen
    }
}
