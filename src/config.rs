//! Match configuration
//!
//! The winning score is the only externally tunable parameter; field
//! geometry and speeds live in [`crate::consts`]. Kept serializable so
//! drivers can load it from a JSON file or embed it in a save.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_MAX_SCORE;

/// Degenerate configurations are programmer errors, rejected at
/// construction rather than handled at simulation time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_score must be at least 1, got {0}")]
    MaxScore(u32),
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Externally tunable match parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Points needed to win the match
    pub max_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl MatchConfig {
    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score == 0 {
            return Err(ConfigError::MaxScore(self.max_score));
        }
        Ok(())
    }

    /// Parse and validate from JSON, e.g. `{"max_score": 5}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
