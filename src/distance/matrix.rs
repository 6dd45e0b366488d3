use tracing::debug;

use crate::domain::types::SiteCatalog;
use crate::error::{Error, Result};

/// Build the `m x m` matrix of pairwise planar Euclidean distances.
///
/// The catalog is validated first: every coordinate must be finite and every
/// demand value finite and non-negative. Failure is fatal to the build; no
/// partial matrix is returned. The result is symmetric with a zero diagonal
/// and is meant to be computed once per catalog and reused across repeated
/// solver calls.
pub fn build_distance_matrix(catalog: &SiteCatalog) -> Result<Vec<Vec<f64>>> {
    validate_catalog(catalog)?;

    let sites = catalog.sites();
    let m = sites.len();
    let mut matrix = vec![vec![0.0; m]; m];

    for i in 0..m {
        for j in (i + 1)..m {
            let d = sites[i].distance_to(&sites[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }

    debug!("Built {} x {} distance matrix", m, m);
    Ok(matrix)
}

fn validate_catalog(catalog: &SiteCatalog) -> Result<()> {
    for site in catalog.sites() {
        if !site.x.is_finite() || !site.y.is_finite() {
            return Err(Error::invalid_input(format!(
                "site '{}' has non-finite coordinates ({}, {})",
                site.name, site.x, site.y
            )));
        }
        for (column, &demand) in &site.demands {
            if !demand.is_finite() || demand < 0.0 {
                return Err(Error::invalid_input(format!(
                    "site '{}' has invalid demand {} in column '{}'",
                    site.name, demand, column
                )));
            }
        }
    }
    Ok(())
}
