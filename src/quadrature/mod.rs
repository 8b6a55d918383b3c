//! Composite trapezoidal quadrature
//!
//! - `trapezoid`: the sequential rule over one sub-interval
//! - `parallel`: partitioning an interval across worker threads and combining
//!   their partial results
//! - `result`: the value and per-worker statistics of a run

pub mod parallel;
pub mod result;
pub mod trapezoid;

#[allow(unused_imports)]
pub use parallel::{ParallelConfig, RemainderPolicy, parallel_integral, run_parallel_integral};
#[allow(unused_imports)]
pub use result::{IntegrationResult, IntegrationStatistics, WorkerStatistics};
#[allow(unused_imports)]
pub use trapezoid::partial_integral;
