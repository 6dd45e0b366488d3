// Public modules
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod setup;
pub mod solver;

// Re-exports for convenience
pub use domain::types::{
    CoverageResult, ProblemInstance, Site, SiteCatalog, Solution, SolverConfig,
};
pub use error::{Error, Result};
