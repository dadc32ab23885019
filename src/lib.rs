//! Crop Advisor Rust Implementation
//!
//! Deterministic, explainable crop recommendation for a farm query.
//!
//! Module layout:
//! - `data/`: Crop profiles and the static catalog (CSV loading with Polars)
//! - `query/`: Farm conditions and their validation
//! - `metrics/`: Smart score, risk level and ranking orders
//! - `scorer/`: Main recommendation entry point (sequential and Rayon batch)
//! - `explanation/`: Cards and Markdown/JSON/HTML formatters
//! - `speech/`: Voice prompt and external text-to-speech bridge
//! - `factors/`: Factor analysis chart series

pub mod error;
pub mod config;
pub mod data;
pub mod query;
pub mod metrics;
pub mod scorer;
pub mod explanation;
pub mod speech;
pub mod factors;

// Re-export commonly used types
pub use error::{AdvisorResult, CropAdvisorError, SpeechError};
pub use config::{Ranking, ScorerConfig};
pub use data::{CropCatalog, CropProfile};
pub use query::{FarmQuery, SoilType};
pub use metrics::{RiskLevel, RiskThresholds};
pub use scorer::{recommend, CropScorer, Recommendation, RecommendationResult};
pub use explanation::{ExplanationGenerator, RecommendationExplanation};
pub use speech::{CommandSynthesizer, SpeechSynthesizer, VoiceAssistant, VoiceClip};
pub use factors::{factor_series, Factor, FactorSelection, FactorSeries};
