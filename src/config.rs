pub mod constant {
    pub(crate) const SITE_COUNT: usize = 28;
    pub(crate) const FACILITY_COUNT: usize = 5;
    pub(crate) const COVERAGE_RADIUS: f64 = 10_000.0;
    pub(crate) const DEMAND_COLUMN: &str = "need1";
    pub(crate) const SEED: usize = 64;
    pub(crate) const SITE_CSV_PATH: &str = "data/mclp_sites.csv";
    pub(crate) const RESULT_CSV_PATH: &str = "coverage_result.csv";
}
