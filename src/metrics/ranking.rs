//! Catalog orderings
//!
//! Both orderings are stable: crops that compare equal keep catalog order.

use crate::config::Ranking;
use crate::data::CropProfile;
use std::cmp::Ordering;

/// Trending key: expected profit, then sustainability, both descending
pub fn trending_cmp(a: &CropProfile, b: &CropProfile) -> Ordering {
    b.expected_profit
        .total_cmp(&a.expected_profit)
        .then_with(|| b.sustainability_score.cmp(&a.sustainability_score))
}

/// Catalog positions sorted by the given ordering
///
/// `scores[i]` must be the smart score of `crops[i]`.
pub fn rank_indices(crops: &[CropProfile], scores: &[f64], ranking: Ranking) -> Vec<usize> {
    debug_assert_eq!(crops.len(), scores.len());
    let mut order: Vec<usize> = (0..crops.len()).collect();
    match ranking {
        Ranking::Trending => order.sort_by(|&a, &b| trending_cmp(&crops[a], &crops[b])),
        Ranking::SmartScore => order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a])),
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SMART_SCORE_SCALE;
    use crate::data::CropCatalog;
    use crate::metrics::crop_smart_score;

    fn names(crops: &[CropProfile], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| crops[i].name.clone()).collect()
    }

    fn builtin_scores(crops: &[CropProfile]) -> Vec<f64> {
        crops
            .iter()
            .map(|c| crop_smart_score(c, DEFAULT_SMART_SCORE_SCALE))
            .collect()
    }

    #[test]
    fn test_trending_order() {
        let crops = CropCatalog::builtin().crops();
        let order = rank_indices(crops, &builtin_scores(crops), Ranking::Trending);
        assert_eq!(names(crops, &order), ["Mustard", "Wheat", "Maize", "Rice", "Barley"]);
    }

    #[test]
    fn test_smart_score_order() {
        let crops = CropCatalog::builtin().crops();
        let order = rank_indices(crops, &builtin_scores(crops), Ranking::SmartScore);
        assert_eq!(names(crops, &order), ["Mustard", "Maize", "Wheat", "Barley", "Rice"]);
    }

    #[test]
    fn test_sustainability_breaks_profit_tie() {
        let crops = vec![
            CropProfile::new("Gram", 1.0, 40000.0, 6, 0.3, ["Wheat"]),
            CropProfile::new("Lentil", 1.0, 40000.0, 9, 0.3, ["Rice"]),
        ];
        let scores = builtin_scores(&crops);
        let order = rank_indices(&crops, &scores, Ranking::Trending);
        assert_eq!(names(&crops, &order), ["Lentil", "Gram"]);
    }

    #[test]
    fn test_full_tie_keeps_insertion_order() {
        let crops = vec![
            CropProfile::new("Gram", 1.0, 40000.0, 8, 0.3, ["Wheat"]),
            CropProfile::new("Lentil", 1.0, 40000.0, 8, 0.3, ["Rice"]),
            CropProfile::new("Pea", 1.0, 40000.0, 8, 0.3, ["Maize"]),
        ];
        let scores = builtin_scores(&crops);
        for ranking in [Ranking::Trending, Ranking::SmartScore] {
            let order = rank_indices(&crops, &scores, ranking);
            assert_eq!(order, [0, 1, 2]);
        }
    }
}
