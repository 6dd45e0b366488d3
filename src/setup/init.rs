use tracing::{debug, info};

use crate::distance::matrix::build_distance_matrix;
use crate::domain::types::{ProblemInstance, Site, SiteCatalog, SolverConfig};
use crate::error::Result;

/// Assemble a validated `ProblemInstance` from raw sites and a config.
///
/// The catalog is validated and the distance matrix built exactly once here;
/// every combination the engine evaluates reuses the cached matrix.
pub fn setup(sites: Vec<Site>, config: SolverConfig) -> Result<ProblemInstance> {
    let catalog = SiteCatalog::new(sites);
    info!(
        "Starting setup with {} sites, {} facilities, radius {}",
        catalog.len(),
        config.facility_count,
        config.radius
    );

    config.validate(catalog.len())?;
    let demands = catalog.demand_vector(&config.demand_column)?;
    let distance_matrix = build_distance_matrix(&catalog)?;
    debug!("Demand vector: {:?}", demands);

    info!("Setup completed successfully");

    Ok(ProblemInstance {
        catalog,
        demands,
        distance_matrix,
        config,
    })
}
