use std::collections::BTreeMap;

use crate::domain::types::CoverageResult;
use crate::error::{Error, Result};

/// Evaluate which demand points a facility subset covers.
///
/// A point `j` is covered iff at least one chosen facility `i` has
/// `dm[i][j] <= radius`. Coverage is an OR over the chosen facilities, so the
/// scan stops at the first facility within radius; checking the rest cannot
/// change the outcome. Each covered point contributes its demand to the total
/// exactly once, no matter how many facilities reach it.
pub fn evaluate_coverage(
    dm: &[Vec<f64>],
    facilities: &[usize],
    radius: f64,
    demands: &[f64],
    names: &[String],
) -> Result<CoverageResult> {
    validate_subset(facilities, dm.len())?;

    let mut total_demand = 0.0;
    let mut covered = BTreeMap::new();

    for (j, &demand) in demands.iter().enumerate() {
        if facilities.iter().any(|&i| dm[i][j] <= radius) {
            total_demand += demand;
            covered.insert(names[j].clone(), demand);
        }
    }

    Ok(CoverageResult {
        total_demand,
        covered,
    })
}

// Malformed subsets should be unreachable with a correct generator; this is a
// defensive check, not a recoverable condition.
fn validate_subset(facilities: &[usize], catalog_len: usize) -> Result<()> {
    let mut seen = vec![false; catalog_len];
    for &i in facilities {
        if i >= catalog_len {
            return Err(Error::invalid_subset(format!(
                "facility index {} out of range for catalog of {}",
                i, catalog_len
            )));
        }
        if seen[i] {
            return Err(Error::invalid_subset(format!(
                "duplicate facility index {}",
                i
            )));
        }
        seen[i] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::matrix::build_distance_matrix;
    use crate::domain::types::{Site, SiteCatalog, DEFAULT_DEMAND_COLUMN};

    fn instance() -> (Vec<Vec<f64>>, Vec<f64>, Vec<String>) {
        let catalog = SiteCatalog::new(vec![
            Site::new("a", 0.0, 0.0, 10.0),
            Site::new("b", 10.0, 0.0, 20.0),
            Site::new("c", 20.0, 0.0, 5.0),
        ]);
        let dm = build_distance_matrix(&catalog).unwrap();
        let demands = catalog.demand_vector(DEFAULT_DEMAND_COLUMN).unwrap();
        (dm, demands, catalog.names())
    }

    #[test]
    fn covers_points_within_radius_once() {
        let (dm, demands, names) = instance();

        // Both facilities reach "b"; its demand must count once.
        let result = evaluate_coverage(&dm, &[0, 2], 10.0, &demands, &names).unwrap();
        assert_eq!(result.total_demand, 35.0);
        assert_eq!(result.covered.len(), 3);
        assert_eq!(result.covered["b"], 20.0);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let (dm, demands, names) = instance();
        let result = evaluate_coverage(&dm, &[0], 10.0, &demands, &names).unwrap();
        assert_eq!(result.total_demand, 30.0);
        assert!(!result.covered.contains_key("c"));
    }

    #[test]
    fn total_matches_covered_map() {
        let (dm, demands, names) = instance();
        let result = evaluate_coverage(&dm, &[1], 10.0, &demands, &names).unwrap();
        let sum: f64 = result.covered.values().sum();
        assert_eq!(result.total_demand, sum);
    }

    #[test]
    fn empty_subset_covers_nothing() {
        let (dm, demands, names) = instance();
        let result = evaluate_coverage(&dm, &[], 10.0, &demands, &names).unwrap();
        assert_eq!(result.total_demand, 0.0);
        assert!(result.covered.is_empty());
    }

    #[test]
    fn rejects_malformed_subsets() {
        let (dm, demands, names) = instance();
        assert!(evaluate_coverage(&dm, &[3], 10.0, &demands, &names).is_err());
        assert!(evaluate_coverage(&dm, &[1, 1], 10.0, &demands, &names).is_err());
    }
}
