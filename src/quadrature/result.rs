//! Integration result types and statistics

#![allow(dead_code)]

use std::time::Duration;

/// Result of a parallel integration
#[derive(Debug, Clone, Default)]
pub struct IntegrationResult {
    /// The integral estimate over the full interval
    pub value: f64,
    /// Statistics from the run
    pub statistics: IntegrationStatistics,
}

impl IntegrationResult {
    /// Result for input with nothing to compute (no threads or no segments)
    pub fn degenerate() -> Self {
        Self::default()
    }
}

/// Statistics from one parallel integration
#[derive(Debug, Clone, Default)]
pub struct IntegrationStatistics {
    /// Wall-clock time from planning to the final reduction
    pub elapsed_time: Duration,
    /// Per-worker statistics, indexed by worker id
    pub workers: Vec<WorkerStatistics>,
}

impl IntegrationStatistics {
    /// Number of worker threads that ran
    pub fn thread_count(&self) -> usize {
        self.workers.len()
    }

    /// Total trapezoids evaluated across all workers
    pub fn segments_evaluated(&self) -> usize {
        self.workers.iter().map(|w| w.segments).sum()
    }

    /// Slowest worker's elapsed time
    pub fn slowest_worker(&self) -> Duration {
        self.workers
            .iter()
            .map(|w| w.elapsed)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// What one worker computed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// Left edge of the worker's sub-interval
    pub start: f64,
    /// Right edge of the worker's sub-interval
    pub end: f64,
    /// Trapezoids assigned to the worker
    pub segments: usize,
    /// The worker's partial integral
    pub partial: f64,
    /// Time spent in the worker
    pub elapsed: Duration,
}
