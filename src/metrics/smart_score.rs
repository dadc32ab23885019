//! SMART SCORE: PROFIT-TO-RISK RATIO
//!
//! score = expected_profit / (risk_factor × scale), scale = 100,000 by default.
//!
//! Edge cases:
//!   - zero profit scores 0 (also when risk is 0, avoiding 0/0)
//!   - zero risk with positive profit scores +∞ and ranks ahead of everything
//!
//! Display values are rounded to 2 decimals, as the economics panel shows them.
//! JSON has no infinity: unbounded scores are written as `null` and read back
//! as +∞ (see `unbounded`).

use crate::data::CropProfile;

/// Smart score from raw profit and risk
pub fn smart_score(expected_profit: f64, risk_factor: f64, scale: f64) -> f64 {
    if expected_profit == 0.0 {
        return 0.0;
    }
    if risk_factor == 0.0 {
        return f64::INFINITY;
    }
    expected_profit / (risk_factor * scale)
}

/// Smart score of a catalog crop
pub fn crop_smart_score(crop: &CropProfile, scale: f64) -> f64 {
    smart_score(crop.expected_profit, crop.risk_factor, scale)
}

/// Round to 2 decimals for display (infinite scores pass through)
pub fn display_score(score: f64) -> f64 {
    if !score.is_finite() {
        return score;
    }
    libm::round(score * 100.0) / 100.0
}

/// Score text for tables: 2 decimals, "∞" when unbounded
pub fn format_score(score: f64) -> String {
    if score.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", display_score(score))
    }
}

/// Serde adapter for smart scores: +∞ <-> `null`
pub mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if score.is_finite() {
            serializer.serialize_f64(*score)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
