//! Value objects
//!
//! Immutable-by-contract data carried between layers.

pub mod configuration;
pub mod job_statistics;

pub use configuration::Configuration;
pub use job_statistics::JobStatistics;
