//! Order statistics for robust background and noise estimation.

pub mod selection;
pub mod statistics;

pub use selection::torben_median;
pub use statistics::{robust_stats, robust_stats_with_scratch, RobustStats, SampleValue};
