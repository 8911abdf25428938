//! Run configuration for a classification.
//!
//! Holds the values a caller picks per invocation: the safe-region limit and
//! how the grid is scanned. Every field has a default, so a JSON file only
//! needs the fields it changes.
//!
//! ```
//! use chronal_logic::config::RunConfig;
//! use chronal_logic::classifier::ScanMode;
//!
//! let config = RunConfig::from_json(r#"{ "limit": 32, "mode": "sequential" }"#).unwrap();
//! assert_eq!(config.limit, 32);
//! assert_eq!(config.mode, ScanMode::Sequential);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::classifier::ScanMode;
use crate::error::ChronalError;

/// Safe-region limit used by the puzzle.
pub const DEFAULT_LIMIT: u64 = 10_000;

/// Grids smaller than this are never worth spreading across threads.
pub const DEFAULT_PARALLEL_MIN_CELLS: u64 = 4_096;

/// Caller-chosen parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cells with a summed distance strictly below this are safe.
    pub limit: u64,
    /// Sequential or rayon row-parallel scan.
    pub mode: ScanMode,
    /// Below this many cells, parallel mode scans sequentially.
    pub parallel_min_cells: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: ScanMode::Parallel,
            parallel_min_cells: DEFAULT_PARALLEL_MIN_CELLS,
        }
    }
}

impl RunConfig {
    /// Decode a config from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ChronalError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The limit must be positive.
    pub fn validate(&self) -> Result<(), ChronalError> {
        if self.limit == 0 {
            return Err(ChronalError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RunConfig::default();
        assert_eq!(config.limit, 10_000);
        assert_eq!(config.mode, ScanMode::Parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(RunConfig::from_json("{}").unwrap(), RunConfig::default());
    }

    #[test]
    fn zero_limit_rejected() {
        let config = RunConfig {
            limit: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ChronalError::InvalidLimit(0))
        ));
    }

    #[test]
    fn unknown_mode_is_config_error() {
        assert!(matches!(
            RunConfig::from_json(r#"{ "mode": "sideways" }"#),
            Err(ChronalError::Config(_))
        ));
    }

    #[test]
    fn roundtrips_through_json() {
        let config = RunConfig {
            limit: 32,
            mode: ScanMode::Sequential,
            parallel_min_cells: 1,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RunConfig::from_json(&json).unwrap(), config);
    }
}
