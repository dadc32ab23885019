//! Crop Catalog Loading and Management
//!
//! Holds the static crop profiles the scorer ranks. The built-in catalog is
//! embedded and initialised once per process; alternative catalogs can be
//! read from CSV with Polars (rotation partners pipe-separated, e.g.
//! `Pulses|Mustard`).

use crate::error::{AdvisorResult, CropAdvisorError};
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Column names used by the CSV catalog format and `to_frame()`
pub const CATALOG_COLUMNS: [&str; 6] = [
    "name",
    "expected_yield",
    "expected_profit",
    "sustainability_score",
    "risk_factor",
    "rotation_partners",
];

/// Highest allowed sustainability score
pub const MAX_SUSTAINABILITY: u8 = 10;

/// Immutable crop profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    /// Tons per hectare
    pub expected_yield: f64,
    /// Currency units (₹ in the built-in catalog)
    pub expected_profit: f64,
    /// 0-10 inclusive
    pub sustainability_score: u8,
    /// Probability of yield loss, 0-1
    pub risk_factor: f64,
    /// Crops suited to follow this one, in order of preference
    pub rotation_partners: Vec<String>,
}

impl CropProfile {
    pub fn new<I, S>(
        name: impl Into<String>,
        expected_yield: f64,
        expected_profit: f64,
        sustainability_score: u8,
        risk_factor: f64,
        rotation_partners: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            expected_yield,
            expected_profit,
            sustainability_score,
            risk_factor,
            rotation_partners: rotation_partners.into_iter().map(Into::into).collect(),
        }
    }

    /// Check per-profile value ranges
    pub fn validate(&self) -> AdvisorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CropAdvisorError::invalid_catalog(&self.name, "name is blank"));
        }
        if !self.expected_yield.is_finite() || self.expected_yield <= 0.0 {
            return Err(CropAdvisorError::invalid_catalog(
                &self.name,
                format!("expected_yield must be positive (got {})", self.expected_yield),
            ));
        }
        if !self.expected_profit.is_finite() || self.expected_profit < 0.0 {
            return Err(CropAdvisorError::invalid_catalog(
                &self.name,
                format!("expected_profit must be non-negative (got {})", self.expected_profit),
            ));
        }
        if self.sustainability_score > MAX_SUSTAINABILITY {
            return Err(CropAdvisorError::invalid_catalog(
                &self.name,
                format!(
                    "sustainability_score must be within [0, {}] (got {})",
                    MAX_SUSTAINABILITY, self.sustainability_score
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.risk_factor) {
            return Err(CropAdvisorError::invalid_catalog(
                &self.name,
                format!("risk_factor must be within [0, 1] (got {})", self.risk_factor),
            ));
        }
        Ok(())
    }

    /// Whether `name` is listed as a rotation partner (case-insensitive)
    pub fn rotates_into(&self, name: &str) -> bool {
        self.rotation_partners
            .iter()
            .any(|p| p.eq_ignore_ascii_case(name))
    }
}

/// Validated, ordered crop catalog
///
/// Insertion order is kept: it breaks ranking ties.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
    /// Lowercased name → position
    index: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// Build a catalog, rejecting invalid profiles and duplicate names
    ///
    /// Names are compared case-insensitively. An empty list is allowed;
    /// scoring it fails with `EmptyCatalog`.
    pub fn new(crops: Vec<CropProfile>) -> AdvisorResult<Self> {
        let mut index = FxHashMap::default();
        for (pos, crop) in crops.iter().enumerate() {
            crop.validate()?;
            if index.insert(crop.name.to_lowercase(), pos).is_some() {
                return Err(CropAdvisorError::invalid_catalog(&crop.name, "duplicate crop name"));
            }
        }
        Ok(Self { crops, index })
    }

    /// The embedded five-crop catalog, built on first use
    pub fn builtin() -> &'static CropCatalog {
        static BUILTIN: OnceLock<CropCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let crops = builtin_profiles();
            let index = crops
                .iter()
                .enumerate()
                .map(|(pos, c)| (c.name.to_lowercase(), pos))
                .collect();
            tracing::info!("Initialised built-in crop catalog ({} crops)", crops.len());
            CropCatalog { crops, index }
        })
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropProfile> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Look up a crop by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.index
            .get(&name.to_lowercase())
            .map(|&pos| &self.crops[pos])
    }

    /// Catalog as a DataFrame (one row per crop, partners pipe-joined)
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.crops.iter().map(|c| c.name.as_str()).collect();
        let yields: Vec<f64> = self.crops.iter().map(|c| c.expected_yield).collect();
        let profits: Vec<f64> = self.crops.iter().map(|c| c.expected_profit).collect();
        let sustainability: Vec<u32> = self
            .crops
            .iter()
            .map(|c| c.sustainability_score as u32)
            .collect();
        let risks: Vec<f64> = self.crops.iter().map(|c| c.risk_factor).collect();
        let partners: Vec<String> = self
            .crops
            .iter()
            .map(|c| c.rotation_partners.join("|"))
            .collect();

        df! {
            CATALOG_COLUMNS[0] => names,
            CATALOG_COLUMNS[1] => yields,
            CATALOG_COLUMNS[2] => profits,
            CATALOG_COLUMNS[3] => sustainability,
            CATALOG_COLUMNS[4] => risks,
            CATALOG_COLUMNS[5] => partners,
        }
    }

    /// Build a catalog from a DataFrame with `CATALOG_COLUMNS`
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let names = df
            .column("name")
            .context("Column 'name' not found")?
            .str()
            .context("Column 'name' is not string type")?;
        let yields = numeric_column(df, "expected_yield")?;
        let profits = numeric_column(df, "expected_profit")?;
        let risks = numeric_column(df, "risk_factor")?;
        let sustainability = df
            .column("sustainability_score")
            .context("Column 'sustainability_score' not found")?
            .cast(&DataType::Int64)
            .context("Column 'sustainability_score' is not integer")?;
        let sustainability = sustainability.i64()?;
        // Partners are optional: a catalog without the column has no rotations
        let partners = match df.column("rotation_partners") {
            Ok(column) => Some(column.str().context("Column 'rotation_partners' is not string type")?),
            Err(_) => None,
        };

        let mut crops = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let name = names
                .get(idx)
                .with_context(|| format!("Row {}: missing crop name", idx))?;
            let score = sustainability
                .get(idx)
                .with_context(|| format!("Row {} ({}): missing sustainability_score", idx, name))?;
            let score = u8::try_from(score)
                .map_err(|_| CropAdvisorError::invalid_catalog(name, format!("sustainability_score out of range (got {})", score)))?;
            let rotation: Vec<String> = partners
                .and_then(|p| p.get(idx))
                .map(split_partners)
                .unwrap_or_default();

            crops.push(CropProfile {
                name: name.to_string(),
                expected_yield: required(yields.get(idx), idx, name, "expected_yield")?,
                expected_profit: required(profits.get(idx), idx, name, "expected_profit")?,
                sustainability_score: score,
                risk_factor: required(risks.get(idx), idx, name, "risk_factor")?,
                rotation_partners: rotation,
            });
        }

        Ok(Self::new(crops)?)
    }

    /// Load a catalog from CSV
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load crop catalog CSV: {:?}", path))?;

        let catalog = Self::from_frame(&df)
            .with_context(|| format!("Invalid crop catalog: {:?}", path))?;
        tracing::info!("Loaded crop catalog from {:?} ({} crops)", path, catalog.len());
        Ok(catalog)
    }
}

impl<'a> IntoIterator for &'a CropCatalog {
    type Item = &'a CropProfile;
    type IntoIter = std::slice::Iter<'a, CropProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.crops.iter()
    }
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", name))?;
    Ok(column.f64()?.clone())
}

fn required(value: Option<f64>, idx: usize, name: &str, column: &str) -> Result<f64> {
    value.with_context(|| format!("Row {} ({}): missing {}", idx, name, column))
}

fn split_partners(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Sample crop data shipped with the advisor
fn builtin_profiles() -> Vec<CropProfile> {
    vec![
        CropProfile::new("Wheat", 3.2, 45000.0, 8, 0.25, ["Pulses", "Mustard"]),
        CropProfile::new("Rice", 2.8, 38000.0, 6, 0.40, ["Pulses", "Vegetables"]),
        CropProfile::new("Mustard", 2.5, 50000.0, 9, 0.20, ["Wheat", "Vegetables"]),
        CropProfile::new("Barley", 2.0, 30000.0, 7, 0.30, ["Maize", "Mustard"]),
        CropProfile::new("Maize", 3.0, 42000.0, 8, 0.22, ["Potato", "Pulses"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polars::prelude::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = CropCatalog::builtin();
        let rebuilt = CropCatalog::new(builtin.crops().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 5);

        let names: Vec<&str> = builtin.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Wheat", "Rice", "Mustard", "Barley", "Maize"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = CropCatalog::builtin();
        let mustard = catalog.get("mustard").unwrap();
        assert_eq!(mustard.name, "Mustard");
        assert!(mustard.rotates_into("wheat"));
        assert!(catalog.get("Potato").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = CropCatalog::new(vec![
            CropProfile::new("Wheat", 3.2, 45000.0, 8, 0.25, ["Pulses"]),
            CropProfile::new("wheat", 3.0, 40000.0, 7, 0.30, Vec::<String>::new()),
        ])
        .unwrap_err();
        assert!(matches!(err, CropAdvisorError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_out_of_range_profiles_rejected() {
        let risky = CropProfile::new("Jute", 2.0, 20000.0, 5, 1.5, ["Rice"]);
        assert!(matches!(
            CropCatalog::new(vec![risky]),
            Err(CropAdvisorError::InvalidCatalog { .. })
        ));

        let unsustainable = CropProfile::new("Cotton", 1.8, 60000.0, 11, 0.35, ["Wheat"]);
        assert!(CropCatalog::new(vec![unsustainable]).is_err());

        let barren = CropProfile::new("Millet", 0.0, 15000.0, 7, 0.1, ["Pulses"]);
        assert!(CropCatalog::new(vec![barren]).is_err());
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = CropCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_frame_round_trip_keeps_partners() {
        let df = CropCatalog::builtin().to_frame().unwrap();
        assert_eq!(df.height(), 5);
        assert_eq!(df.width(), CATALOG_COLUMNS.len());

        let catalog = CropCatalog::from_frame(&df).unwrap();
        let barley = catalog.get("Barley").unwrap();
        assert_eq!(barley.rotation_partners, ["Maize", "Mustard"]);
        assert_relative_eq!(barley.risk_factor, 0.30, epsilon = 1e-12);
    }

    #[test]
    fn test_from_frame_with_integer_columns() {
        let df = df! {
            "name" => &["Sorghum", "Chickpea"],
            "expected_yield" => &[2.1, 1.4],
            "expected_profit" => &[28000i64, 36000],
            "sustainability_score" => &[7i64, 9],
            "risk_factor" => &[0.18, 0.27],
            "rotation_partners" => &[Some("Chickpea| Mustard"), None],
        }
        .unwrap();

        let catalog = CropCatalog::from_frame(&df).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.crops()[0].rotation_partners, ["Chickpea", "Mustard"]);
        assert!(catalog.crops()[1].rotation_partners.is_empty());
        assert_relative_eq!(catalog.crops()[1].expected_profit, 36000.0);
    }

    #[test]
    fn test_from_frame_rejects_bad_sustainability() {
        let df = df! {
            "name" => &["Sorghum"],
            "expected_yield" => &[2.1],
            "expected_profit" => &[28000.0],
            "sustainability_score" => &[300i64],
            "risk_factor" => &[0.18],
        }
        .unwrap();

        assert!(CropCatalog::from_frame(&df).is_err());
    }

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        use std::io::Write;
        let path = std::env::temp_dir().join(format!(
            "crop_catalog_{}_{}.csv",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_csv() {
        let path = write_temp_csv(
            "valid",
            "name,expected_yield,expected_profit,sustainability_score,risk_factor,rotation_partners\n\
             Wheat,3.2,45000,8,0.25,Pulses|Mustard\n\
             Chickpea,1.4,36000,9,0.27,\n\
             Mustard,2.5,50000,9,0.20,Wheat | Vegetables\n",
        );
        let catalog = CropCatalog::load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Wheat", "Chickpea", "Mustard"]);
        assert_eq!(catalog.crops()[0].rotation_partners, ["Pulses", "Mustard"]);
        assert!(catalog.crops()[1].rotation_partners.is_empty());
        assert_eq!(catalog.crops()[2].rotation_partners, ["Wheat", "Vegetables"]);
        assert_eq!(catalog.crops()[0].sustainability_score, 8);
        assert_relative_eq!(catalog.crops()[2].expected_profit, 50000.0);
        assert_relative_eq!(catalog.crops()[1].risk_factor, 0.27, epsilon = 1e-12);
    }

    #[test]
    fn test_load_csv_rejects_out_of_range_risk() {
        let path = write_temp_csv(
            "risky",
            "name,expected_yield,expected_profit,sustainability_score,risk_factor,rotation_partners\n\
             Jute,2.0,20000,5,1.5,Rice\n",
        );
        let err = CropCatalog::load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.chain().any(|cause| matches!(
            cause.downcast_ref::<CropAdvisorError>(),
            Some(CropAdvisorError::InvalidCatalog { .. })
        )));
    }

    #[test]
    fn test_load_csv_missing_file() {
        let path = std::env::temp_dir().join("crop_catalog_does_not_exist.csv");
        assert!(CropCatalog::load_csv(&path).is_err());
    }
}
