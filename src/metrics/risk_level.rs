//! RISK LEVEL: COARSE BUCKETING OF risk_factor
//!
//!   Low     risk < 0.25
//!   Medium  0.25 <= risk < 0.40
//!   High    risk >= 0.40
//!
//! Lower bounds are closed, upper bounds open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold pair separating the three risk buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// First risk factor classified Medium
    pub medium_from: f64,
    /// First risk factor classified High
    pub high_from: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium_from: 0.25,
            high_from: 0.40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn classify(risk_factor: f64, thresholds: &RiskThresholds) -> Self {
        if risk_factor < thresholds.medium_from {
            RiskLevel::Low
        } else if risk_factor < thresholds.high_from {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
        }
    }

    /// Hindi label shown next to the English one
    pub fn hindi(&self) -> &'static str {
        match self {
            RiskLevel::Low => "कम",
            RiskLevel::Medium => "मध्यम",
            RiskLevel::High => "उच्च",
        }
    }

    /// "🟢 Low / कम"
    pub fn bilingual_label(&self) -> String {
        format!("{} {} / {}", self.icon(), self.as_str(), self.hindi())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(RiskLevel::classify(0.20, &t), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.25, &t), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.39, &t), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.40, &t), RiskLevel::High);
        assert_eq!(RiskLevel::classify(0.0, &t), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(1.0, &t), RiskLevel::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = RiskThresholds {
            medium_from: 0.1,
            high_from: 0.2,
        };
        assert_eq!(RiskLevel::classify(0.15, &t), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.25, &t), RiskLevel::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::Low.bilingual_label(), "🟢 Low / कम");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }
}
