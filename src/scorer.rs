//! Crop Scorer - Main coordinator for ranking crops
//!
//! Evaluates every catalog crop (smart score, risk level), builds both the
//! trending and the smart-score orderings, and returns the top K of each with
//! rotation rationales. Includes a parallel (Rayon) batch entry point.
//!
//! Scoring is a pure function of (query, catalog, k, config): no randomness,
//! no shared mutable state, the catalog is only read.

use crate::config::{Ranking, ScorerConfig};
use crate::data::{CropCatalog, CropProfile};
use crate::error::{AdvisorResult, CropAdvisorError};
use crate::explanation::rotation::rotation_rationale;
use crate::metrics::{evaluate_crop, rank_indices, trending_cmp, CropMetrics, RiskLevel};
use crate::query::FarmQuery;
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One ranked crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position within its ordering
    pub rank: usize,
    pub crop: CropProfile,
    /// Smart score (unrounded, `null` in JSON when unbounded)
    #[serde(with = "crate::metrics::smart_score::unbounded")]
    pub score: f64,
    pub risk_level: RiskLevel,
    pub rationale: String,
}

/// Ranked recommendation in both orderings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Ordering returned by `top()`
    pub primary: Ranking,
    /// Top K by (profit, sustainability)
    pub trending: Vec<Recommendation>,
    /// Top K by smart score
    pub smart_score: Vec<Recommendation>,
}

impl RecommendationResult {
    /// Recommendations in the requested ordering
    pub fn view(&self, ranking: Ranking) -> &[Recommendation] {
        match ranking {
            Ranking::Trending => &self.trending,
            Ranking::SmartScore => &self.smart_score,
        }
    }

    /// Recommendations in the primary ordering
    pub fn top(&self) -> &[Recommendation] {
        self.view(self.primary)
    }

    pub fn len(&self) -> usize {
        self.top().len()
    }

    pub fn is_empty(&self) -> bool {
        self.top().is_empty()
    }

    /// Crop names in the primary ordering
    pub fn crop_names(&self) -> Vec<&str> {
        self.top().iter().map(|r| r.crop.name.as_str()).collect()
    }

    /// Tabular view of the primary ordering
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let rows = self.top();
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank as u32).collect();
        let names: Vec<&str> = rows.iter().map(|r| r.crop.name.as_str()).collect();
        let yields: Vec<f64> = rows.iter().map(|r| r.crop.expected_yield).collect();
        let profits: Vec<f64> = rows.iter().map(|r| r.crop.expected_profit).collect();
        let sustainability: Vec<u32> = rows
            .iter()
            .map(|r| r.crop.sustainability_score as u32)
            .collect();
        let risks: Vec<f64> = rows.iter().map(|r| r.crop.risk_factor).collect();
        let levels: Vec<&str> = rows.iter().map(|r| r.risk_level.as_str()).collect();
        let scores: Vec<f64> = rows.iter().map(|r| r.score).collect();
        let rationales: Vec<&str> = rows.iter().map(|r| r.rationale.as_str()).collect();

        df! {
            "rank" => ranks,
            "crop" => names,
            "expected_yield" => yields,
            "expected_profit" => profits,
            "sustainability_score" => sustainability,
            "risk_factor" => risks,
            "risk_level" => levels,
            "smart_score" => scores,
            "rationale" => rationales,
        }
    }
}

/// Main crop scorer
#[derive(Debug, Clone, Default)]
pub struct CropScorer {
    config: ScorerConfig,
}

impl CropScorer {
    /// Scorer with a validated configuration
    pub fn new(config: ScorerConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Recommend `k` crops, primary ordering from config
    pub fn recommend(
        &self,
        query: &FarmQuery,
        catalog: &CropCatalog,
        k: usize,
    ) -> AdvisorResult<RecommendationResult> {
        self.recommend_with(query, catalog, k, self.config.primary_ranking)
    }

    /// Recommend `default_k` crops (3 unless configured)
    pub fn recommend_default(
        &self,
        query: &FarmQuery,
        catalog: &CropCatalog,
    ) -> AdvisorResult<RecommendationResult> {
        self.recommend(query, catalog, self.config.default_k)
    }

    /// Recommend `k` crops with an explicit primary ordering
    ///
    /// Fails with `InvalidQuery` for out-of-range query fields or `k` outside
    /// `[1, catalog size]`, and with `EmptyCatalog` when there is nothing to
    /// rank. Either everything succeeds or nothing is returned.
    pub fn recommend_with(
        &self,
        query: &FarmQuery,
        catalog: &CropCatalog,
        k: usize,
        ranking: Ranking,
    ) -> AdvisorResult<RecommendationResult> {
        query.validate()?;
        if catalog.is_empty() {
            return Err(CropAdvisorError::EmptyCatalog);
        }
        if k == 0 || k > catalog.len() {
            return Err(CropAdvisorError::invalid_query(
                "k",
                k,
                format!("must be within [1, {}]", catalog.len()),
            ));
        }

        let crops = catalog.crops();
        let metrics: Vec<CropMetrics> = crops
            .iter()
            .map(|crop| evaluate_crop(crop, &self.config))
            .collect();
        let scores: Vec<f64> = metrics.iter().map(|m| m.smart_score).collect();

        let previous = query.previous_crop();
        let select = |order: Vec<usize>| -> Vec<Recommendation> {
            order
                .into_iter()
                .take(k)
                .enumerate()
                .map(|(pos, idx)| Recommendation {
                    rank: pos + 1,
                    crop: crops[idx].clone(),
                    score: metrics[idx].smart_score,
                    risk_level: metrics[idx].risk_level,
                    rationale: rotation_rationale(&crops[idx], previous, catalog),
                })
                .collect()
        };

        let trending = select(rank_indices(crops, &scores, Ranking::Trending));
        let smart_score = select(rank_indices(crops, &scores, Ranking::SmartScore));

        tracing::debug!(
            soil = %query.soil_type,
            soil_ph = query.soil_ph,
            k,
            ?ranking,
            "Scored {} crops",
            crops.len()
        );

        Ok(RecommendationResult {
            primary: ranking,
            trending,
            smart_score,
        })
    }

    /// Score many queries in parallel; results keep input order
    pub fn recommend_batch(
        &self,
        queries: &[FarmQuery],
        catalog: &CropCatalog,
        k: usize,
    ) -> Vec<AdvisorResult<RecommendationResult>> {
        queries
            .par_iter()
            .map(|query| self.recommend(query, catalog, k))
            .collect()
    }

    /// "Top crops trending in market": first `n` crops by (profit, sustainability)
    pub fn trending<'a>(&self, catalog: &'a CropCatalog, n: usize) -> Vec<&'a CropProfile> {
        let mut crops: Vec<&CropProfile> = catalog.iter().collect();
        crops.sort_by(|a, b| trending_cmp(a, b));
        crops.truncate(n);
        crops
    }
}

/// Recommend with the default configuration
pub fn recommend(
    query: &FarmQuery,
    catalog: &CropCatalog,
    k: usize,
) -> AdvisorResult<RecommendationResult> {
    CropScorer::default().recommend(query, catalog, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SoilType;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_recommendation() {
        let result = recommend(&FarmQuery::default(), CropCatalog::builtin(), 3).unwrap();
        assert_eq!(result.primary, Ranking::Trending);
        assert_eq!(result.crop_names(), ["Mustard", "Wheat", "Maize"]);

        let smart: Vec<&str> = result
            .smart_score
            .iter()
            .map(|r| r.crop.name.as_str())
            .collect();
        assert_eq!(smart, ["Mustard", "Maize", "Wheat"]);

        let ranks: Vec<usize> = result.top().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_scores_and_levels_attached() {
        let result = recommend(&FarmQuery::default(), CropCatalog::builtin(), 5).unwrap();
        let wheat = result.top().iter().find(|r| r.crop.name == "Wheat").unwrap();
        assert_relative_eq!(wheat.score, 1.8, epsilon = 1e-9);
        assert_eq!(wheat.risk_level, RiskLevel::Medium);
        assert!(wheat.rationale.contains("Pulses, Mustard"));

        let rice = result.top().iter().find(|r| r.crop.name == "Rice").unwrap();
        assert_eq!(rice.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_explicit_smart_score_primary() {
        let scorer = CropScorer::default();
        let result = scorer
            .recommend_with(&FarmQuery::default(), CropCatalog::builtin(), 2, Ranking::SmartScore)
            .unwrap();
        assert_eq!(result.crop_names(), ["Mustard", "Maize"]);
        assert_eq!(result.trending.len(), 2);
    }

    #[test]
    fn test_k_bounds() {
        let catalog = CropCatalog::builtin();
        let query = FarmQuery::default();
        assert!(matches!(
            recommend(&query, catalog, 0),
            Err(CropAdvisorError::InvalidQuery { field: "k", .. })
        ));
        assert!(matches!(
            recommend(&query, catalog, 6),
            Err(CropAdvisorError::InvalidQuery { field: "k", .. })
        ));
        assert_eq!(recommend(&query, catalog, 5).unwrap().len(), 5);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CropCatalog::new(Vec::new()).unwrap();
        let err = recommend(&FarmQuery::default(), &catalog, 3).unwrap_err();
        assert!(matches!(err, CropAdvisorError::EmptyCatalog));
    }

    #[test]
    fn test_invalid_query_fails_whole_request() {
        let query = FarmQuery::new(SoilType::Sandy, 2.0, 100, 30);
        assert!(matches!(
            recommend(&query, CropCatalog::builtin(), 3),
            Err(CropAdvisorError::InvalidQuery { field: "soil_ph", .. })
        ));
    }

    #[test]
    fn test_config_default_k() {
        let scorer = CropScorer::new(ScorerConfig {
            default_k: 4,
            ..ScorerConfig::default()
        })
        .unwrap();
        let result = scorer
            .recommend_default(&FarmQuery::default(), CropCatalog::builtin())
            .unwrap();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_batch_keeps_order() {
        let scorer = CropScorer::default();
        let queries = vec![
            FarmQuery::default(),
            FarmQuery::new(SoilType::Red, 12.0, 100, 25),
            FarmQuery::new(SoilType::Black, 7.2, 300, 32).with_previous_crop("Wheat"),
        ];
        let results = scorer.recommend_batch(&queries, CropCatalog::builtin(), 3);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().crop_names(), ["Mustard", "Wheat", "Maize"]);
    }

    #[test]
    fn test_trending_panel() {
        let scorer = CropScorer::default();
        let names: Vec<&str> = scorer
            .trending(CropCatalog::builtin(), 3)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Mustard", "Wheat", "Maize"]);
        assert_eq!(scorer.trending(CropCatalog::builtin(), 10).len(), 5);
    }

    #[test]
    fn test_result_frame() {
        let result = recommend(&FarmQuery::default(), CropCatalog::builtin(), 3).unwrap();
        let df = result.to_frame().unwrap();
        assert_eq!(df.height(), 3);
        let crops = df.column("crop").unwrap().str().unwrap();
        assert_eq!(crops.get(0), Some("Mustard"));
        let levels = df.column("risk_level").unwrap().str().unwrap();
        assert_eq!(levels.get(1), Some("Medium"));
    }

    #[test]
    fn test_zero_risk_result_json_round_trip() {
        let catalog = CropCatalog::new(vec![
            CropProfile::new("Moong", 1.2, 40000.0, 9, 0.0, ["Wheat"]),
            CropProfile::new("Wheat", 3.2, 45000.0, 8, 0.25, ["Moong"]),
        ])
        .unwrap();
        let result = recommend(&FarmQuery::default(), &catalog, 2).unwrap();
        assert_eq!(result.smart_score[0].crop.name, "Moong");
        assert_eq!(result.smart_score[0].score, f64::INFINITY);

        let json = serde_json::to_string(&result).unwrap();
        let back: RecommendationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero_scale = ScorerConfig {
            smart_score_scale: 0.0,
            ..ScorerConfig::default()
        };
        assert!(CropScorer::new(zero_scale).is_err());

        let mut inverted = ScorerConfig::default();
        inverted.risk_thresholds.medium_from = 0.5;
        inverted.risk_thresholds.high_from = 0.3;
        assert!(CropScorer::new(inverted).is_err());

        assert!(CropScorer::new(ScorerConfig::default()).is_ok());
    }
}
