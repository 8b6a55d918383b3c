//! Fork-join coordinator that runs one trapezoid worker per thread.

#![allow(dead_code)]

use crate::error::IntegrationError;
use crate::integrand::{Integrand, SqrtOnePlusExp};
use crate::quadrature::parallel::config::{ParallelConfig, RemainderPolicy};
use crate::quadrature::parallel::partition::{WorkerSpan, plan_partition};
use crate::quadrature::result::{IntegrationResult, IntegrationStatistics, WorkerStatistics};
use crate::quadrature::trapezoid::partial_integral;
use std::any::Any;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Integrate `sqrt(1 + e^x)` over `[a, b]` with `segments` trapezoids split
/// across `threads` workers.
///
/// Zero threads or zero segments yields `0.0`.
pub fn parallel_integral(
    a: f64,
    b: f64,
    segments: usize,
    threads: usize,
) -> Result<f64, IntegrationError> {
    let config = ParallelConfig::default().with_threads(threads);
    run_parallel_integral(&SqrtOnePlusExp, a, b, segments, &config).map(|result| result.value)
}

/// Run a parallel trapezoidal integration of `f` with the given configuration.
///
/// Spawns exactly `config.thread_count` scoped threads. Each worker writes its
/// statistics into its own slot of a pre-allocated vector, and the partial
/// results are summed in worker order once every thread has been joined.
pub fn run_parallel_integral<I: Integrand + ?Sized>(
    f: &I,
    a: f64,
    b: f64,
    segments: usize,
    config: &ParallelConfig,
) -> Result<IntegrationResult, IntegrationError> {
    let start_time = Instant::now();
    let threads = config.thread_count;

    let plan = plan_partition(a, b, segments, threads, config.remainder)?;
    if plan.is_empty() {
        debug!(segments, threads, "nothing to integrate");
        return Ok(IntegrationResult::degenerate());
    }

    if config.remainder == RemainderPolicy::Truncate && segments % threads != 0 {
        warn!(
            dropped = segments % threads,
            segments, threads, "remainder segments dropped"
        );
    }
    debug!(a, b, segments, threads, policy = %config.remainder, "partition planned");

    let mut slots = vec![WorkerStatistics::default(); plan.len()];
    fork_join(f, &plan, &mut slots)?;

    let value = slots.iter().fold(0.0, |acc, worker| acc + worker.partial);
    let statistics = IntegrationStatistics {
        elapsed_time: start_time.elapsed(),
        workers: slots,
    };

    info!(
        value,
        threads,
        segments = statistics.segments_evaluated(),
        elapsed_us = statistics.elapsed_time.as_micros() as u64,
        "integration complete"
    );

    Ok(IntegrationResult { value, statistics })
}

/// Spawn one worker per span and join them all before returning.
fn fork_join<I: Integrand + ?Sized>(
    f: &I,
    plan: &[WorkerSpan],
    slots: &mut [WorkerStatistics],
) -> Result<(), IntegrationError> {
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(plan.len());
        let mut spawn_error = None;

        for (slot, span) in slots.iter_mut().zip(plan) {
            let span = *span;
            let spawned = thread::Builder::new()
                .name(format!("ptrapz-worker-{}", span.worker_id))
                .spawn_scoped(scope, move || run_worker(f, span, slot));

            match spawned {
                Ok(handle) => handles.push((span.worker_id, handle)),
                Err(source) => {
                    spawn_error = Some(IntegrationError::Spawn {
                        worker_id: span.worker_id,
                        source,
                    });
                    break;
                }
            }
        }

        // Join everything that started, even after a failure, so no panic is
        // left for the scope to re-raise.
        let mut first_panic = None;
        for (worker_id, handle) in handles {
            if let Err(payload) = handle.join()
                && first_panic.is_none()
            {
                first_panic = Some(IntegrationError::WorkerPanicked {
                    worker_id,
                    message: panic_message(payload.as_ref()),
                });
            }
        }

        match spawn_error.or(first_panic) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })
}

/// Worker body: integrate one span and record the outcome in its slot.
fn run_worker<I: Integrand + ?Sized>(f: &I, span: WorkerSpan, slot: &mut WorkerStatistics) {
    let started = Instant::now();
    let partial = partial_integral(f, span.start, span.end, span.segments);

    *slot = WorkerStatistics {
        worker_id: span.worker_id,
        start: span.start,
        end: span.end,
        segments: span.segments,
        partial,
        elapsed: started.elapsed(),
    };

    debug!(
        worker_id = span.worker_id,
        start = span.start,
        end = span.end,
        segments = span.segments,
        partial,
        "worker finished"
    );
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
