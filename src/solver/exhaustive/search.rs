use std::error::Error;

use csv::Writer;
use itertools::Itertools;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{
    COVERAGE_RADIUS, DEMAND_COLUMN, FACILITY_COUNT, RESULT_CSV_PATH, SITE_COUNT, SITE_CSV_PATH,
};
use crate::domain::solution::{assemble_solution, print_solution};
use crate::domain::types::{CoverageResult, ProblemInstance, Solution, SolverConfig};
use crate::error::Result;
use crate::evaluation::coverage::evaluate_coverage;
use crate::fixtures::data_generator::load_catalog;
use crate::setup::init::setup;

/// Exhaustive search over all `n`-subsets of the catalog.
///
/// Combinations are enumerated in lexicographic index order and the incumbent
/// is replaced only on strict improvement, so of several equally good optima
/// the first one in enumeration order is returned. `Ok(None)` means no
/// combination covered any demand at all; in particular `n = 0` never yields
/// the empty set as a valid pick.
pub fn run_search(problem_instance: &ProblemInstance) -> Result<Option<Solution>> {
    let pi = problem_instance;
    pi.config.validate(pi.catalog.len())?;

    let names = pi.catalog.names();
    let m = pi.catalog.len();
    let n = pi.config.facility_count;

    let mut best: Option<(Vec<usize>, CoverageResult)> = None;
    let mut best_total = 0.0;

    for combination in (0..m).combinations(n) {
        let coverage = evaluate_coverage(
            &pi.distance_matrix,
            &combination,
            pi.config.radius,
            &pi.demands,
            &names,
        )?;

        if coverage.total_demand > best_total {
            debug!(
                "New best {:?} covering {:.2}",
                combination, coverage.total_demand
            );
            best_total = coverage.total_demand;
            best = Some((combination, coverage));
        }
    }

    Ok(assemble_solution(best, pi))
}

/// Initialize tracing
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .init();
}

/// End-to-end demo workflow: load a site catalog, solve, report, export.
pub fn run() -> std::result::Result<(), Box<dyn Error>> {
    init_tracing();

    info!(
        "Starting MCLP solver with {} sites, {} facilities, radius {}",
        SITE_COUNT, FACILITY_COUNT, COVERAGE_RADIUS
    );

    let sites = load_catalog(SITE_CSV_PATH, SITE_COUNT);
    let config = SolverConfig::new(FACILITY_COUNT, COVERAGE_RADIUS, DEMAND_COLUMN);

    let problem_instance = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        setup(sites, config)?
    };

    let solution = {
        let span = span!(
            Level::INFO,
            "exhaustive_search",
            sites = problem_instance.catalog.len(),
            facilities = problem_instance.config.facility_count
        );
        let _guard = span.enter();
        run_search(&problem_instance)?
    };

    print_solution(solution.as_ref());

    if let Some(solution) = &solution {
        save_to_csv(solution, RESULT_CSV_PATH)?;
        info!("Coverage breakdown written to {}", RESULT_CSV_PATH);
    }

    Ok(())
}

fn save_to_csv(solution: &Solution, filename: &str) -> Result<()> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["site", "covered_demand"])?;
    for (name, demand) in &solution.coverage.covered {
        wtr.write_record([name.as_str(), &demand.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
