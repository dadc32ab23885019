use crate::explanation::types::RecommendationExplanation;
use serde_json;

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &RecommendationExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &RecommendationExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}
