use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Column name used when a site carries a single need score.
pub const DEFAULT_DEMAND_COLUMN: &str = "need1";

/// A candidate facility location with planar (already projected) coordinates.
///
/// Coordinates are expected in an equal-area or equal-distance projection so
/// that Euclidean distance approximates ground distance in meters. A site may
/// carry several demand columns; which one the solver uses is selected by
/// `SolverConfig::demand_column`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Site {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub demands: BTreeMap<String, f64>,
}

impl Site {
    pub fn new(name: impl Into<String>, x: f64, y: f64, demand: f64) -> Self {
        let mut demands = BTreeMap::new();
        demands.insert(DEFAULT_DEMAND_COLUMN.to_string(), demand);
        Self {
            name: name.into(),
            x,
            y,
            demands,
        }
    }

    /// Planar Euclidean distance to another site.
    pub fn distance_to(&self, other: &Site) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Immutable, ordered list of candidate sites.
///
/// The order is significant only because it fixes the deterministic
/// enumeration order of the search; it carries no other meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteCatalog {
    sites: Vec<Site>,
}

impl SiteCatalog {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn names(&self) -> Vec<String> {
        self.sites.iter().map(|s| s.name.clone()).collect()
    }

    /// Extracts the demand vector for a named column, aligned with site
    /// indices. Fails if any site lacks the column.
    pub fn demand_vector(&self, column: &str) -> Result<Vec<f64>> {
        self.sites
            .iter()
            .map(|site| {
                site.demands.get(column).copied().ok_or_else(|| {
                    Error::invalid_configuration(format!(
                        "site '{}' has no demand column '{}'",
                        site.name, column
                    ))
                })
            })
            .collect()
    }
}

/// Options recognized by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Number of facilities to place (`n`).
    pub facility_count: usize,
    /// Coverage radius (`r`), in the same linear unit as the coordinates.
    pub radius: f64,
    /// Which demand column of the catalog to maximize coverage of.
    pub demand_column: String,
}

impl SolverConfig {
    pub fn new(facility_count: usize, radius: f64, demand_column: impl Into<String>) -> Self {
        Self {
            facility_count,
            radius,
            demand_column: demand_column.into(),
        }
    }

    /// Checked before any search starts; a bad configuration is fatal to the
    /// invocation.
    pub fn validate(&self, catalog_len: usize) -> Result<()> {
        if !(self.radius > 0.0) {
            return Err(Error::invalid_configuration(format!(
                "coverage radius must be positive, got {}",
                self.radius
            )));
        }
        if self.facility_count > catalog_len {
            return Err(Error::invalid_configuration(format!(
                "facility count {} exceeds catalog size {}",
                self.facility_count, catalog_len
            )));
        }
        Ok(())
    }
}

/// Demand covered by one facility subset.
///
/// `total_demand` is always the sum of the values in `covered`: a site
/// contributes once no matter how many chosen facilities reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    pub total_demand: f64,
    pub covered: BTreeMap<String, f64>,
}

/// The winning facility subset, packaged for downstream consumption.
/// Created once per solver invocation and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Chosen catalog indices, strictly increasing.
    pub facilities: Vec<usize>,
    pub facility_names: Vec<String>,
    pub coverage: CoverageResult,
    pub config: SolverConfig,
}

/// Read-only bundle handed to the search engine: the catalog, the demand
/// vector selected by the config, and the precomputed distance matrix.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub catalog: SiteCatalog,
    pub demands: Vec<f64>,
    pub distance_matrix: Vec<Vec<f64>>,
    pub config: SolverConfig,
}
