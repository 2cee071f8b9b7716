//! Diagnostics returned alongside detector output: per-stage timings and a
//! serializable run summary.

pub mod report;
pub mod timing;

pub use report::{count_edges, DetectionReport};
pub use timing::{timed, StageTiming, TimingBreakdown};
