//! Scoring configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default score used by the missing-value policy.
pub const DEFAULT_SCORE: f64 = 0.2;

/// Configuration shared by all field scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Floor for two non-empty values; half of it is returned when only
    /// one side has a value.
    pub default_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_score: DEFAULT_SCORE,
        }
    }
}

impl ScoringConfig {
    pub fn with_default_score(default_score: f64) -> Result<Self> {
        let config = Self { default_score };
        config.validate()?;
        Ok(config)
    }

    /// Check that the default score leaves room for the rescaled range.
    pub fn validate(&self) -> Result<()> {
        if !self.default_score.is_finite() || !(0.0..1.0).contains(&self.default_score) {
            return Err(Error::InvalidDefaultScore(self.default_score));
        }
        Ok(())
    }
}
