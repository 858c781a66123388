//! Performance instrumentation for the pointer hot paths.
//!
//! Move events arrive at display rate and candidate queries can touch many
//! elements, so both are wrapped in `profile_scope!`. The macro compiles to
//! nothing unless the `profiling` feature is enabled:
//!
//! ```ignore
//! fn set_moving(&mut self, event: &CursorEvent<E>) {
//!     profile_scope!("set_moving", MOVE_WARN_THRESHOLD_MS);
//!     // ...
//! }
//! ```
//!
//! Timers record into per-thread `OperationStats` and log a `warn!` when a scope
//! runs past its threshold.

use crate::constants::STATS_SAMPLE_COUNT;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;

/// Profile a scope with the given name and warning threshold in milliseconds.
/// Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

thread_local! {
    static OPERATION_STATS: RefCell<HashMap<&'static str, OperationStats>> =
        RefCell::new(HashMap::new());
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling timing statistics for one named operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    /// Total invocations, including those no longer retained.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

/// Statistics recorded on the current thread for `name`.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    OPERATION_STATS.with(|stats| stats.borrow().get(name).cloned())
}

pub fn record_operation(name: &'static str, elapsed_ms: f64) {
    OPERATION_STATS.with(|stats| stats.borrow_mut().entry(name).or_default().record(elapsed_ms));
}

pub fn reset_operation_stats() {
    OPERATION_STATS.with(|stats| stats.borrow_mut().clear());
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Times a scope, records it and warns on drop if it ran past the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        record_operation(self.name, elapsed_ms);

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and return its result with the elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
