//! Recommend crops for the default farm query and print the dashboard panels
//!
//! Usage: recommend_demo [config.json] [catalog.csv]
//!
//! Logging follows RUST_LOG (default: info).

use anyhow::{Context, Result};
use crop_advisor_rust::explanation::MarkdownFormatter;
use crop_advisor_rust::metrics::display_score;
use crop_advisor_rust::{
    factor_series, CropCatalog, CropScorer, ExplanationGenerator, Factor, FactorSelection,
    FarmQuery, ScorerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => ScorerConfig::load(Path::new(&path))?,
        None => ScorerConfig::default(),
    };

    let loaded;
    let catalog: &CropCatalog = match args.next() {
        Some(path) => {
            loaded = CropCatalog::load_csv(&path)
                .with_context(|| format!("Failed to load catalog {}", path))?;
            &loaded
        }
        None => CropCatalog::builtin(),
    };

    let scorer = CropScorer::new(config)?;

    // Home panel: trending crops
    println!("📈 Top 3 Crops Trending in Market / शीर्ष 3 फसलें\n");
    let trending = scorer.trending(catalog, 3);
    for crop in &trending {
        println!(
            "  {} → Profit: ₹{:.0} | Sustainability: {}/10",
            crop.name, crop.expected_profit, crop.sustainability_score
        );
    }

    // Factor analysis for every factor, default selection marked
    let selection = FactorSelection::default();
    let mut rng = StdRng::seed_from_u64(2024);
    println!("\n📊 Factor Analysis / कारक विश्लेषण\n");
    for factor in Factor::ALL {
        let series = factor_series(factor, &trending, &mut rng);
        let marker = if selection.is_selected(factor) { "*" } else { " " };
        let values: Vec<String> = series
            .points
            .iter()
            .map(|p| format!("{}={:.0}", p.crop, p.value))
            .collect();
        println!("  {} {:<32} {}", marker, series.axis_label, values.join(", "));
    }

    // Recommendation
    let query = FarmQuery::default();
    let start = Instant::now();
    let result = scorer.recommend_default(&query, catalog)?;
    let elapsed = start.elapsed();

    println!("\nSmart-score view:");
    for rec in &result.smart_score {
        println!(
            "  {}. {} (score {:.2}, risk {})",
            rec.rank,
            rec.crop.name,
            display_score(rec.score),
            rec.risk_level
        );
    }

    let explanation = ExplanationGenerator::generate(&result, &query);
    println!("\n{}", MarkdownFormatter::format(&explanation));

    tracing::info!(
        "Recommendation computed in {:.3} ms",
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
