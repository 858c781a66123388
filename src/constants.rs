//! Library-wide constants.
//!
//! Centralizes defaults and tuning values used across the tracker, resolver
//! and instrumentation.

// ============================================================================
// Drag Square
// ============================================================================

/// Inset subtracted from each edge of the computed drag square
pub const DEFAULT_SQUARE_MARGIN: f64 = 4.0;

// ============================================================================
// Element Resolution
// ============================================================================

/// Default number of ancestor levels (target included) checked when matching
/// attribute constraints
pub const DEFAULT_MAX_ANCESTOR_CHECK_DEPTH: usize = 30;

// ============================================================================
// Logging & Profiling
// ============================================================================

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "dragsquare=info";

/// Pointer moves can arrive at display rate; warn when a single move takes
/// longer than one 60 FPS frame
pub const MOVE_WARN_THRESHOLD_MS: f64 = 16.67;

/// Threshold for candidate index queries
pub const QUERY_WARN_THRESHOLD_MS: f64 = 4.0;

/// Number of samples kept per operation for rolling statistics
pub const STATS_SAMPLE_COUNT: usize = 100;
