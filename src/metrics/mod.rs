//! Metric modules for crop scoring
//!
//! Each per-crop metric lives in its own module.

pub mod smart_score;
pub mod risk_level;
pub mod ranking;

// Re-export metric functions
pub use smart_score::{crop_smart_score, display_score, format_score, smart_score};
pub use risk_level::{RiskLevel, RiskThresholds};
pub use ranking::{rank_indices, trending_cmp};

use crate::config::ScorerConfig;
use crate::data::CropProfile;

/// Per-crop metrics computed for every catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMetrics {
    pub smart_score: f64,
    pub risk_level: RiskLevel,
}

/// Evaluate one crop under the given configuration
pub fn evaluate_crop(crop: &CropProfile, config: &ScorerConfig) -> CropMetrics {
    CropMetrics {
        smart_score: crop_smart_score(crop, config.smart_score_scale),
        risk_level: RiskLevel::classify(crop.risk_factor, &config.risk_thresholds),
    }
}
