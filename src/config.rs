//! Tracker configuration.
//!
//! Recognized options are the square margin and the default ancestor depth used
//! by the element resolver. Configuration can be built in code or loaded from
//! JSON; missing fields fall back to the defaults.

use crate::constants::{DEFAULT_MAX_ANCESTOR_CHECK_DEPTH, DEFAULT_SQUARE_MARGIN};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Inset applied to each edge of the computed square
    pub square_margin: f64,
    /// Default traversal bound for attribute-matching ancestor walks,
    /// overridable per constraint
    pub max_ancestor_check_depth: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            square_margin: DEFAULT_SQUARE_MARGIN,
            max_ancestor_check_depth: DEFAULT_MAX_ANCESTOR_CHECK_DEPTH,
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_square_margin(mut self, margin: f64) -> Self {
        self.square_margin = margin;
        self
    }

    pub fn with_max_ancestor_check_depth(mut self, depth: usize) -> Self {
        self.max_ancestor_check_depth = depth;
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            square_margin = config.square_margin,
            max_ancestor_check_depth = config.max_ancestor_check_depth,
            "Loaded tracker config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.square_margin.is_finite() || self.square_margin < 0.0 {
            warn!(square_margin = self.square_margin, "Rejected square margin");
            return Err(ConfigError::InvalidMargin(self.square_margin));
        }
        if self.max_ancestor_check_depth == 0 {
            warn!("Rejected zero max ancestor check depth");
            return Err(ConfigError::InvalidDepth(0));
        }
        Ok(())
    }
}
