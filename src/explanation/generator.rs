use crate::config::Ranking;
use crate::explanation::rotation::{partner_list, ROTATION_BENEFIT};
use crate::explanation::types::*;
use crate::metrics::display_score;
use crate::query::FarmQuery;
use crate::scorer::{Recommendation, RecommendationResult};
use crate::speech::result_voice_prompt;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate the complete explanation for a result
    ///
    /// Cards follow the result's primary ordering.
    pub fn generate(result: &RecommendationResult, query: &FarmQuery) -> RecommendationExplanation {
        let top = result.top();

        RecommendationExplanation {
            overall: Self::generate_overall(result),
            conditions: Self::generate_conditions(query),
            crops: top.iter().map(Self::crop_card).collect(),
            economics: top.iter().map(Self::economics_card).collect(),
            rotation: top.iter().map(Self::rotation_card).collect(),
            voice_prompt: result_voice_prompt(result),
        }
    }

    fn generate_overall(result: &RecommendationResult) -> OverallExplanation {
        let top_crops: Vec<String> = result
            .crop_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let message = match top_crops.as_slice() {
            [] => "No crops to recommend".to_string(),
            [first] => format!("Best crop for your farm: {}", first),
            [first, rest @ ..] => format!(
                "Best crop for your farm: {} (followed by {})",
                first,
                rest.join(", ")
            ),
        };

        OverallExplanation {
            ranking: result.primary,
            ranking_display: Self::ranking_display(result.primary).to_string(),
            top_crops,
            message,
        }
    }

    fn generate_conditions(query: &FarmQuery) -> ConditionsSummary {
        let previous_crop = query.previous_crop().map(str::to_string);
        let message = format!(
            "{} soil, pH {:.1}, {} mm rainfall, {} °C; previous crop: {}",
            query.soil_type,
            query.soil_ph,
            query.rainfall_mm,
            query.temperature_c,
            previous_crop.as_deref().unwrap_or("None")
        );

        ConditionsSummary {
            soil_type: query.soil_type.to_string(),
            soil_ph: query.soil_ph,
            rainfall_mm: query.rainfall_mm,
            temperature_c: query.temperature_c,
            previous_crop,
            message,
        }
    }

    fn crop_card(rec: &Recommendation) -> CropCard {
        CropCard {
            rank: rec.rank,
            name: rec.crop.name.clone(),
            expected_yield: rec.crop.expected_yield,
            expected_profit: rec.crop.expected_profit,
            sustainability: format!("{}/10", rec.crop.sustainability_score),
        }
    }

    fn economics_card(rec: &Recommendation) -> EconomicsCard {
        EconomicsCard {
            name: rec.crop.name.clone(),
            expected_profit: rec.crop.expected_profit,
            risk_level: rec.risk_level,
            risk_label: rec.risk_level.bilingual_label(),
            smart_score: display_score(rec.score),
        }
    }

    fn rotation_card(rec: &Recommendation) -> RotationCard {
        let message = if rec.crop.rotation_partners.is_empty() {
            format!("No rotation partners recorded for {}", rec.crop.name)
        } else {
            format!(
                "After harvesting {}, rotate with → {}",
                rec.crop.name,
                partner_list(&rec.crop)
            )
        };

        RotationCard {
            crop: rec.crop.name.clone(),
            partners: rec.crop.rotation_partners.clone(),
            message,
            detail: ROTATION_BENEFIT.to_string(),
            rationale: rec.rationale.clone(),
        }
    }

    fn ranking_display(ranking: Ranking) -> &'static str {
        match ranking {
            Ranking::Trending => "Trending (profit, sustainability)",
            Ranking::SmartScore => "Smart score (profit / risk)",
        }
    }
}
