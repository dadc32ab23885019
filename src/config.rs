//! Scorer configuration
//!
//! Every field has a default matching the advisor dashboard, so an empty
//! JSON object (or no file at all) gives the stock behaviour.

use crate::metrics::RiskThresholds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Divisor applied to `risk_factor` in the smart score
pub const DEFAULT_SMART_SCORE_SCALE: f64 = 100_000.0;

/// Number of crops returned when the caller does not ask for a count
pub const DEFAULT_K: usize = 3;

/// Which ordering the scorer treats as primary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// Profit, then sustainability, descending
    #[default]
    Trending,
    /// Profit-to-risk ratio, descending
    SmartScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub smart_score_scale: f64,
    pub default_k: usize,
    pub risk_thresholds: RiskThresholds,
    pub primary_ranking: Ranking,
    /// Language code handed to the speech synthesizer
    pub voice_language: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            smart_score_scale: DEFAULT_SMART_SCORE_SCALE,
            default_k: DEFAULT_K,
            risk_thresholds: RiskThresholds::default(),
            primary_ranking: Ranking::Trending,
            voice_language: "hi".to_string(),
        }
    }
}

impl ScorerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scorer config: {:?}", path))?;

        let config: ScorerConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse scorer config JSON")?;

        config.validate()?;
        tracing::info!("Loaded scorer config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.smart_score_scale.is_finite() || self.smart_score_scale <= 0.0 {
            anyhow::bail!(
                "smart_score_scale must be positive (got {})",
                self.smart_score_scale
            );
        }
        if self.default_k == 0 {
            anyhow::bail!("default_k must be at least 1");
        }
        let t = &self.risk_thresholds;
        if !(0.0..=1.0).contains(&t.medium_from)
            || !(0.0..=1.0).contains(&t.high_from)
            || t.medium_from > t.high_from
        {
            anyhow::bail!(
                "risk thresholds must satisfy 0 <= medium_from <= high_from <= 1 (got {} / {})",
                t.medium_from,
                t.high_from
            );
        }
        if self.voice_language.trim().is_empty() {
            anyhow::bail!("voice_language must not be blank");
        }
        Ok(())
    }
}
