pub mod parallel;
pub mod search;
