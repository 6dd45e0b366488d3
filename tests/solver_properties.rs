// Cross-component properties of the exhaustive MCLP engine.
use mclp::domain::types::DEFAULT_DEMAND_COLUMN;
use mclp::fixtures::data_generator::generate_random_sites;
use mclp::setup::init::setup;
use mclp::solver::exhaustive::parallel::run_search_parallel;
use mclp::solver::exhaustive::search::run_search;
use mclp::{ProblemInstance, Site, SolverConfig};

fn random_instance(site_count: usize, seed: u64, n: usize, r: f64) -> ProblemInstance {
    let sites = generate_random_sites(site_count, seed);
    setup(sites, SolverConfig::new(n, r, DEFAULT_DEMAND_COLUMN)).unwrap()
}

#[test]
fn solver_is_deterministic() {
    let first = run_search(&random_instance(12, 42, 3, 30_000.0)).unwrap();
    let second = run_search(&random_instance(12, 42, 3, 30_000.0)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn optimal_coverage_is_monotone_in_radius() {
    let mut previous = 0.0;
    for radius in [5_000.0, 10_000.0, 20_000.0, 40_000.0, 80_000.0] {
        let pi = random_instance(12, 42, 2, radius);
        let total = run_search(&pi)
            .unwrap()
            .map(|s| s.coverage.total_demand)
            .unwrap_or(0.0);
        assert!(
            total >= previous,
            "coverage dropped from {} to {} when radius grew to {}",
            previous,
            total,
            radius
        );
        previous = total;
    }
}

#[test]
fn optimal_coverage_is_monotone_in_facility_count() {
    let mut previous = 0.0;
    for n in 1..=5 {
        let pi = random_instance(12, 42, n, 20_000.0);
        let total = run_search(&pi)
            .unwrap()
            .map(|s| s.coverage.total_demand)
            .unwrap_or(0.0);
        assert!(
            total >= previous,
            "coverage dropped from {} to {} when facility count grew to {}",
            previous,
            total,
            n
        );
        previous = total;
    }
}

#[test]
fn full_catalog_covers_all_demand() {
    // With n = m every site is its own facility, so everything within r of
    // anything is covered; the diagonal is zero, so that is all demand.
    let pi = random_instance(10, 7, 10, 1_000.0);
    let total_demand: f64 = pi.demands.iter().sum();

    let solution = run_search(&pi).unwrap().unwrap();
    assert_eq!(solution.coverage.total_demand, total_demand);
    assert_eq!(solution.coverage.covered.len(), 10);
}

#[test]
fn equal_optima_resolve_to_lexicographically_first_subset() {
    // Four isolated sites with identical demand: every 2-subset covers 20.
    let sites = vec![
        Site::new("site0", 0.0, 0.0, 10.0),
        Site::new("site1", 1_000.0, 0.0, 10.0),
        Site::new("site2", 0.0, 1_000.0, 10.0),
        Site::new("site3", 1_000.0, 1_000.0, 10.0),
    ];
    let pi = setup(sites, SolverConfig::new(2, 50.0, DEFAULT_DEMAND_COLUMN)).unwrap();

    let solution = run_search(&pi).unwrap().unwrap();
    assert_eq!(solution.facilities, vec![0, 1]);
    assert_eq!(solution.coverage.total_demand, 20.0);
}

#[test]
fn covered_total_equals_union_of_per_facility_coverage() {
    let pi = random_instance(12, 42, 3, 25_000.0);
    let solution = run_search(&pi).unwrap().unwrap();

    // Recompute the union one facility at a time; a site already covered must
    // not be counted again.
    let mut covered = vec![false; pi.catalog.len()];
    for &i in &solution.facilities {
        for j in 0..pi.catalog.len() {
            if pi.distance_matrix[i][j] <= pi.config.radius {
                covered[j] = true;
            }
        }
    }
    let union_total: f64 = covered
        .iter()
        .zip(&pi.demands)
        .filter_map(|(&hit, &demand)| hit.then_some(demand))
        .sum();

    assert_eq!(solution.coverage.total_demand, union_total);
    assert_eq!(
        solution.coverage.covered.len(),
        covered.iter().filter(|&&hit| hit).count()
    );
}

#[test]
fn parallel_engine_matches_sequential_engine() {
    for seed in [1, 42, 64] {
        for (n, r) in [(1, 15_000.0), (2, 30_000.0), (3, 45_000.0)] {
            let pi = random_instance(10, seed, n, r);
            assert_eq!(
                run_search_parallel(&pi).unwrap(),
                run_search(&pi).unwrap(),
                "engines diverged for seed {} n {} r {}",
                seed,
                n,
                r
            );
        }
    }
}
