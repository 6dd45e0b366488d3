use itertools::Itertools;
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::domain::solution::assemble_solution;
use crate::domain::types::{CoverageResult, ProblemInstance, Solution};
use crate::error::Result;
use crate::evaluation::coverage::evaluate_coverage;

/// A combination that covered some demand, tagged with its position in the
/// lexicographic enumeration so ties can be merged deterministically.
struct Candidate {
    order: usize,
    facilities: Vec<usize>,
    coverage: CoverageResult,
}

/// Parallel variant of the exhaustive search.
///
/// Every worker only reads shared state (distance matrix, demand vector);
/// candidate winners are merged by total demand descending, enumeration index
/// ascending. That reduction is associative and commutative, so the output is
/// bit-identical to `run_search` no matter how rayon splits the work.
pub fn run_search_parallel(problem_instance: &ProblemInstance) -> Result<Option<Solution>> {
    let pi = problem_instance;
    pi.config.validate(pi.catalog.len())?;

    let names = pi.catalog.names();
    let m = pi.catalog.len();
    let n = pi.config.facility_count;

    let best = (0..m)
        .combinations(n)
        .enumerate()
        .par_bridge()
        .map(|(order, combination)| -> Result<Option<Candidate>> {
            let coverage = evaluate_coverage(
                &pi.distance_matrix,
                &combination,
                pi.config.radius,
                &pi.demands,
                &names,
            )?;

            // Zero coverage never beats the initial incumbent.
            if coverage.total_demand > 0.0 {
                Ok(Some(Candidate {
                    order,
                    facilities: combination,
                    coverage,
                }))
            } else {
                Ok(None)
            }
        })
        .try_reduce(|| None, |a, b| Ok(merge(a, b)))?;

    Ok(assemble_solution(
        best.map(|c| (c.facilities, c.coverage)),
        pi,
    ))
}

fn merge(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let b_wins = b.coverage.total_demand > a.coverage.total_demand
                || (b.coverage.total_demand == a.coverage.total_demand && b.order < a.order);
            if b_wins {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}
