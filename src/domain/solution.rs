use colored::Colorize;
use tracing::{debug, info, warn};

use crate::domain::types::{CoverageResult, ProblemInstance, Solution};

/// Package the engine's winner into a `Solution` record for downstream
/// consumption (plotting, logging, further analysis).
///
/// Returns `None` when the engine found no covering subset (the `n = 0` case,
/// or a catalog with zero coverable demand); an empty pick is reported as an
/// explicit absence, never as a zero-facility solution.
pub fn assemble_solution(
    best: Option<(Vec<usize>, CoverageResult)>,
    problem_instance: &ProblemInstance,
) -> Option<Solution> {
    let (facilities, coverage) = best?;
    let facility_names = facilities
        .iter()
        .map(|&i| problem_instance.catalog.sites()[i].name.clone())
        .collect();

    Some(Solution {
        facilities,
        facility_names,
        coverage,
        config: problem_instance.config.clone(),
    })
}

pub fn print_solution(solution: Option<&Solution>) {
    let Some(solution) = solution else {
        warn!("No covering solution found");
        return;
    };

    info!(
        "{}",
        format_args!("Covered demand: {:.2}", solution.coverage.total_demand)
            .to_string()
            .green()
    );
    info!(
        "Chosen facilities: {:?} -> {:?}",
        solution.facilities, solution.facility_names
    );
    for (name, demand) in &solution.coverage.covered {
        debug!("covered: {} with demand {}", name, demand);
    }
}
