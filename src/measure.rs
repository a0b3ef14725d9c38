//! Instrumentation around a single sort run.
//!
//! [`measure`] wraps exactly one [`SortStrategy`] invocation: a monotonic
//! timestamp before, one after, and the comparison tally taken verbatim from
//! the algorithm. The harness performs no comparisons of its own and does not
//! change what the wrapped sort does to the slice.

use std::time::Instant;

use crate::algo::SortStrategy;
use crate::core::Record;

/// Metrics for one measured sort invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport {
    /// Algorithm label, e.g. `"bubble sort"`.
    pub algorithm: &'static str,
    /// Criterion label, e.g. `"name (ascending)"`.
    pub criterion: &'static str,
    /// Element comparisons performed by the algorithm.
    pub comparisons: u64,
    /// Elapsed wall-clock time in milliseconds, sub-millisecond resolution.
    pub elapsed_ms: f64,
}

/// Runs `strategy` over `records` once, timing it with [`Instant`].
///
/// `Instant` is monotonic, so wall-clock adjustments mid-sort cannot skew
/// the reading.
pub fn measure(strategy: SortStrategy, records: &mut [Record]) -> SortReport {
    let start = Instant::now();
    let comparisons = strategy.run(records);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let report = SortReport {
        algorithm: strategy.algorithm(),
        criterion: strategy.criterion(),
        comparisons,
        elapsed_ms,
    };
    tracing::debug!(
        algorithm = report.algorithm,
        criterion = report.criterion,
        comparisons = report.comparisons,
        elapsed_ms = report.elapsed_ms,
        "sort measured"
    );
    report
}
