//! Farm condition queries
//!
//! A `FarmQuery` carries the per-request form inputs (soil, pH, rainfall,
//! temperature, previous crop). Ranges are checked by `validate()`; the
//! scorer calls it before ranking anything.

use crate::error::{AdvisorResult, CropAdvisorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const SOIL_PH_RANGE: RangeInclusive<f64> = 3.5..=9.0;
pub const RAINFALL_MM_RANGE: RangeInclusive<u32> = 0..=500;
pub const TEMPERATURE_C_RANGE: RangeInclusive<i32> = 5..=45;

/// Soil classes offered by the advisor form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Sandy,
    Laterite,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Alluvial,
        SoilType::Black,
        SoilType::Red,
        SoilType::Sandy,
        SoilType::Laterite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
            SoilType::Laterite => "Laterite",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = CropAdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SoilType::ALL
            .iter()
            .copied()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CropAdvisorError::invalid_query(
                    "soil_type",
                    trimmed,
                    "expected one of Alluvial, Black, Red, Sandy, Laterite",
                )
            })
    }
}

/// Farm conditions for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmQuery {
    pub soil_type: SoilType,
    pub soil_ph: f64,
    pub rainfall_mm: u32,
    pub temperature_c: i32,
    /// `None` when nothing was planted last season
    pub previous_crop: Option<String>,
}

impl Default for FarmQuery {
    /// Form defaults: Alluvial soil, pH 6.5, 120 mm, 25 °C, no previous crop
    fn default() -> Self {
        Self {
            soil_type: SoilType::Alluvial,
            soil_ph: 6.5,
            rainfall_mm: 120,
            temperature_c: 25,
            previous_crop: None,
        }
    }
}

impl FarmQuery {
    pub fn new(soil_type: SoilType, soil_ph: f64, rainfall_mm: u32, temperature_c: i32) -> Self {
        Self {
            soil_type,
            soil_ph,
            rainfall_mm,
            temperature_c,
            previous_crop: None,
        }
    }

    /// Set the previous crop; "none" (any case) or blank clears it
    pub fn with_previous_crop(mut self, crop: impl AsRef<str>) -> Self {
        self.previous_crop = normalize_previous_crop(crop.as_ref());
        self
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> AdvisorResult<()> {
        if !SOIL_PH_RANGE.contains(&self.soil_ph) {
            return Err(CropAdvisorError::invalid_query(
                "soil_ph",
                self.soil_ph,
                format!(
                    "must be within [{}, {}]",
                    SOIL_PH_RANGE.start(),
                    SOIL_PH_RANGE.end()
                ),
            ));
        }
        if !RAINFALL_MM_RANGE.contains(&self.rainfall_mm) {
            return Err(CropAdvisorError::invalid_query(
                "rainfall_mm",
                self.rainfall_mm,
                format!(
                    "must be within [{}, {}]",
                    RAINFALL_MM_RANGE.start(),
                    RAINFALL_MM_RANGE.end()
                ),
            ));
        }
        if !TEMPERATURE_C_RANGE.contains(&self.temperature_c) {
            return Err(CropAdvisorError::invalid_query(
                "temperature_c",
                self.temperature_c,
                format!(
                    "must be within [{}, {}]",
                    TEMPERATURE_C_RANGE.start(),
                    TEMPERATURE_C_RANGE.end()
                ),
            ));
        }
        if let Some(prev) = &self.previous_crop {
            if prev.trim().is_empty() {
                return Err(CropAdvisorError::invalid_query(
                    "previous_crop",
                    "\"\"",
                    "use None instead of a blank name",
                ));
            }
        }
        Ok(())
    }

    /// Previous crop, treating a literal "none" as absent
    pub fn previous_crop(&self) -> Option<&str> {
        self.previous_crop
            .as_deref()
            .filter(|p| !p.trim().eq_ignore_ascii_case("none"))
    }
}

fn normalize_previous_crop(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
