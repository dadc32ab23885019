//! Factor analysis charts
//!
//! The home panel charts one factor at a time for the trending crops. The
//! selected factor is a plain value owned by the caller's session; nothing
//! here keeps state between requests. Series are illustrative: pass a seeded
//! rng (`StdRng::seed_from_u64`) to get the same chart twice.

use crate::data::CropProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread applied around profit for the price prediction chart
pub const PRICE_SPREAD: i64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Factor {
    #[default]
    Temperature,
    Rainfall,
    CloudPercentage,
    CropPrice,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::Temperature,
        Factor::Rainfall,
        Factor::CloudPercentage,
        Factor::CropPrice,
    ];

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            Factor::Temperature => "Temperature",
            Factor::Rainfall => "Rainfall",
            Factor::CloudPercentage => "Cloud Percentage",
            Factor::CropPrice => "Current Crop Price Prediction",
        }
    }

    /// Y axis label
    pub fn axis_label(&self) -> &'static str {
        match self {
            Factor::Temperature => "Temperature (°C)",
            Factor::Rainfall => "Rainfall (mm)",
            Factor::CloudPercentage => "Cloud %",
            Factor::CropPrice => "Predicted Price (₹)",
        }
    }

    /// Button caption
    pub fn button_label(&self) -> &'static str {
        match self {
            Factor::Temperature => "🌡 Temperature",
            Factor::Rainfall => "🌧 Rainfall",
            Factor::CloudPercentage => "☁️ Cloud %",
            Factor::CropPrice => "💰 Crop Price",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Factor currently selected in a session (Temperature until changed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactorSelection {
    pub factor: Factor,
}

impl FactorSelection {
    pub fn select(self, factor: Factor) -> Self {
        Self { factor }
    }

    /// Whether a button should render as primary
    pub fn is_selected(&self, factor: Factor) -> bool {
        self.factor == factor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorPoint {
    pub crop: String,
    pub value: f64,
}

/// One bar chart worth of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSeries {
    pub factor: Factor,
    pub title: String,
    pub axis_label: String,
    pub points: Vec<FactorPoint>,
}

/// Build the chart series for `crops` (usually the trending list)
pub fn factor_series<R: Rng>(
    factor: Factor,
    crops: &[&CropProfile],
    rng: &mut R,
) -> FactorSeries {
    let points = crops
        .iter()
        .map(|crop| {
            let value = match factor {
                Factor::Temperature => rng.gen_range(20..=40) as f64,
                Factor::Rainfall => rng.gen_range(50..=200) as f64,
                Factor::CloudPercentage => rng.gen_range(10..=90) as f64,
                Factor::CropPrice => {
                    crop.expected_profit + rng.gen_range(-PRICE_SPREAD..=PRICE_SPREAD) as f64
                }
            };
            FactorPoint {
                crop: crop.name.clone(),
                value,
            }
        })
        .collect();

    FactorSeries {
        factor,
        title: factor.title().to_string(),
        axis_label: factor.axis_label().to_string(),
        points,
    }
}
