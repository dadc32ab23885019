use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_advisor_rust::{CropCatalog, CropScorer, FarmQuery, SoilType};

fn bench_single_query(c: &mut Criterion) {
    let scorer = CropScorer::default();
    let catalog = CropCatalog::builtin();
    let query = FarmQuery::default().with_previous_crop("Barley");

    c.bench_function("recommend_top3", |b| {
        b.iter(|| scorer.recommend(black_box(&query), catalog, 3))
    });
}

fn bench_batch(c: &mut Criterion) {
    let scorer = CropScorer::default();
    let catalog = CropCatalog::builtin();
    let queries: Vec<FarmQuery> = (0..1000)
        .map(|i| {
            let soil = SoilType::ALL[i % SoilType::ALL.len()];
            FarmQuery::new(soil, 4.0 + (i % 50) as f64 * 0.1, (i % 500) as u32, 5 + (i % 40) as i32)
        })
        .collect();

    c.bench_function("recommend_batch_1000", |b| {
        b.iter(|| scorer.recommend_batch(black_box(&queries), catalog, 3))
    });
}

criterion_group!(benches, bench_single_query, bench_batch);
criterion_main!(benches);
