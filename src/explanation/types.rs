use crate::config::Ranking;
use crate::metrics::RiskLevel;
use serde::{Deserialize, Serialize};

/// Complete explanation for a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationExplanation {
    pub overall: OverallExplanation,
    pub conditions: ConditionsSummary,
    pub crops: Vec<CropCard>,
    pub economics: Vec<EconomicsCard>,
    pub rotation: Vec<RotationCard>,
    /// Sentence handed to the voice assistant
    pub voice_prompt: String,
}

/// Headline of the recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub ranking: Ranking,
    pub ranking_display: String, // "Trending (profit, sustainability)"
    pub top_crops: Vec<String>,
    pub message: String,
}

/// Farm conditions the recommendation was made for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsSummary {
    pub soil_type: String,
    pub soil_ph: f64,
    pub rainfall_mm: u32,
    pub temperature_c: i32,
    pub previous_crop: Option<String>,
    pub message: String,
}

/// "Recommended crops for you" card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropCard {
    pub rank: usize,
    pub name: String,
    pub expected_yield: f64,
    pub expected_profit: f64,
    pub sustainability: String, // "8/10"
}

/// Smart economics card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsCard {
    pub name: String,
    pub expected_profit: f64,
    pub risk_level: RiskLevel,
    pub risk_label: String, // "🟢 Low / कम"
    /// Rounded to 2 decimals
    #[serde(with = "crate::metrics::smart_score::unbounded")]
    pub smart_score: f64,
}

/// Crop rotation planner card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationCard {
    pub crop: String,
    pub partners: Vec<String>,
    pub message: String,
    pub detail: String,
    pub rationale: String,
}
