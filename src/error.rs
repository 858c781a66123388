//! Error types for the tracker and its configuration.
//!
//! Only contract violations on state-mutating entry points and configuration
//! loading produce errors. Missing geometry and out-of-order pointer events
//! are ordinary transient states and are reported as `None`/`false` or no-ops.

use thiserror::Error;

/// Errors returned by state-mutating tracker operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// `set_press` was called without an anchor element
    #[error("press requires an anchor element")]
    MissingAnchor,
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Square margin must be finite and non-negative
    #[error("Invalid square margin: {0}")]
    InvalidMargin(f64),

    /// Ancestor depth must allow at least the event target itself
    #[error("Invalid max ancestor check depth: {0} (must be at least 1)")]
    InvalidDepth(usize),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
