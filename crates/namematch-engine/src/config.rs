// Engine configuration: threshold, variation strategy, caps

use serde::{Deserialize, Serialize};

use crate::selector::{DEFAULT_MIN_SCORE, DEFAULT_PARALLEL_THRESHOLD};
use crate::variation::{DEFAULT_MAX_VARIATIONS, StrategyKind};

/// Error type for invalid engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file is not valid JSON or has the wrong shape.
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The threshold is NaN, infinite or outside `[0, 1]`.
    #[error("min_score must be between 0 and 1, got {0}")]
    InvalidMinScore(f64),

    /// The variation cap would leave no room for the query itself.
    #[error("max_variations must be at least 1")]
    InvalidMaxVariations,
}

/// Tunable engine settings.
///
/// Different call sites want different trade-offs between recall and
/// precision, so the threshold and the variation strategy are
/// configuration rather than constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EngineConfig {
    /// Score the top candidate must reach to be reported as the match.
    pub min_score: f64,
    pub strategy: StrategyKind,
    pub max_variations: usize,
    /// Candidate count from which scoring runs on the rayon pool
    /// (`parallel` feature only).
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            strategy: StrategyKind::Broad,
            max_variations: DEFAULT_MAX_VARIATIONS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Threshold 0.6, for sources whose listings are noisy.
    pub fn lenient() -> Self {
        Self {
            min_score: 0.6,
            ..Self::default()
        }
    }

    /// Threshold 0.9, for reports where a wrong match is worse than none.
    pub fn strict() -> Self {
        Self {
            min_score: 0.9,
            ..Self::default()
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_variations(mut self, max_variations: usize) -> Self {
        self.max_variations = max_variations;
        self
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_min_score(self.min_score)?;
        if self.max_variations == 0 {
            return Err(ConfigError::InvalidMaxVariations);
        }
        Ok(())
    }
}

/// Check a threshold supplied per call or in a configuration.
pub fn validate_min_score(min_score: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&min_score) {
        return Err(ConfigError::InvalidMinScore(min_score));
    }
    Ok(())
}
