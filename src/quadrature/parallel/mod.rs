//! Parallel integration over a fixed number of worker threads.
//!
//! # Architecture
//!
//! A single-level fork-join:
//! - the **partition** step assigns each worker a contiguous sub-interval and
//!   a segment count
//! - the **coordinator** spawns one scoped thread per worker, each writing its
//!   partial integral into its own pre-allocated slot
//! - after every thread is joined the partials are summed in worker order
//!
//! # Example
//!
//! ```ignore
//! use ptrapz::quadrature::parallel::{ParallelConfig, run_parallel_integral};
//!
//! let config = ParallelConfig::default().with_threads(4);
//! let result = run_parallel_integral(&SqrtOnePlusExp, 0.0, 1.0, 1000, &config)?;
//! ```

pub mod config;
pub mod coordinator;
pub mod partition;

pub use config::{ParallelConfig, RemainderPolicy};
pub use coordinator::{parallel_integral, run_parallel_integral};
