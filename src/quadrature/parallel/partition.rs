//! Splitting an interval and its segment count across workers.

use crate::error::IntegrationError;
use crate::quadrature::parallel::config::RemainderPolicy;

/// One worker's share of the integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerSpan {
    pub worker_id: usize,
    pub start: f64,
    pub end: f64,
    pub segments: usize,
}

/// Assign a contiguous sub-interval and a segment count to each of
/// `threads` workers.
///
/// When `segments` is a multiple of `threads` (or under
/// [`RemainderPolicy::Truncate`]) the interval is cut into `threads` equal
/// widths, `start_i = a + i * ((b - a) / threads)`, and every worker gets
/// `segments / threads` trapezoids. Under [`RemainderPolicy::Distribute`] the
/// first `segments % threads` workers get one extra trapezoid and each
/// sub-interval is sized in proportion to its segment count, so every
/// trapezoid has the same width.
///
/// The last worker's right edge is always exactly `b`.
///
/// Returns an empty plan if `threads` or `segments` is zero.
pub fn plan_partition(
    a: f64,
    b: f64,
    segments: usize,
    threads: usize,
    policy: RemainderPolicy,
) -> Result<Vec<WorkerSpan>, IntegrationError> {
    if threads == 0 || segments == 0 {
        return Ok(Vec::new());
    }

    let remainder = segments % threads;
    if remainder == 0 {
        return Ok(equal_width(a, b, segments / threads, threads));
    }

    match policy {
        RemainderPolicy::Reject => Err(IntegrationError::UnevenPartition { segments, threads }),
        RemainderPolicy::Truncate => Ok(equal_width(a, b, segments / threads, threads)),
        RemainderPolicy::Distribute => Ok(proportional(a, b, segments, threads)),
    }
}

fn equal_width(a: f64, b: f64, per_thread: usize, threads: usize) -> Vec<WorkerSpan> {
    let range = (b - a) / threads as f64;

    (0..threads)
        .map(|worker_id| {
            let start = a + worker_id as f64 * range;
            // Computed like the next worker's start so neighbours share an edge
            let end = if worker_id == threads - 1 {
                b
            } else {
                a + (worker_id + 1) as f64 * range
            };
            WorkerSpan {
                worker_id,
                start,
                end,
                segments: per_thread,
            }
        })
        .collect()
}

fn proportional(a: f64, b: f64, segments: usize, threads: usize) -> Vec<WorkerSpan> {
    let base = segments / threads;
    let extra = segments % threads;
    let width = b - a;
    let edge = |offset: usize| a + width * (offset as f64 / segments as f64);

    (0..threads)
        .map(|worker_id| {
            let count = base + usize::from(worker_id < extra);
            let offset = worker_id * base + worker_id.min(extra);
            let end = if worker_id == threads - 1 {
                b
            } else {
                edge(offset + count)
            };
            WorkerSpan {
                worker_id,
                start: edge(offset),
                end,
                segments: count,
            }
        })
        .collect()
}
