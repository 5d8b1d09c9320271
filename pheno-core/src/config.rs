use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::PhenoResult;

/// Similarity-scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Ancestor-path length beyond which two terms score exactly 0.0.
    pub max_term_distance: u32,
    /// Fraction of remaining headroom toward 1.0 granted per disorder
    /// shared by both patients. Applied to positive aggregates only.
    pub disorder_bonus: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_term_distance: constants::DEFAULT_MAX_TERM_DISTANCE,
            disorder_bonus: constants::DEFAULT_DISORDER_BONUS,
        }
    }
}

impl SimilarityConfig {
    /// Parse a config from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> PhenoResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
