use criterion::{Criterion, criterion_group, criterion_main};
use shotmap_rs::api::{League, Season, ShotMap, ShotMapConfig, ShotMapSelection};
use shotmap_rs::core::{RawShot, SeasonStats, normalize_shots};
use std::hint::black_box;

fn generated_batch(count: usize) -> Vec<RawShot> {
    (0..count)
        .map(|i| {
            let x = 0.6 + (i % 40) as f64 * 0.01;
            let y = 0.2 + (i % 60) as f64 * 0.01;
            let xg = 0.02 + (i % 30) as f64 * 0.03;
            let result = if i % 9 == 0 { "Goal" } else { "SavedShot" };
            let season = if i % 2 == 0 { "2023" } else { "2022" };
            RawShot::new(format!("{x}"), format!("{y}"), format!("{xg}"), result, season)
        })
        .collect()
}

fn bench_normalize_10k(c: &mut Criterion) {
    let batch = generated_batch(10_000);
    c.bench_function("normalize_10k", |b| {
        b.iter(|| {
            let normalized = normalize_shots(black_box(&batch));
            let _ = SeasonStats::from_shots(&normalized.records);
        })
    });
}

fn bench_shot_map_build_10k(c: &mut Criterion) {
    let batch = generated_batch(10_000);
    let config = ShotMapConfig::default();
    let season = Season::new("2023").expect("supported season");

    c.bench_function("shot_map_build_10k", |b| {
        b.iter(|| {
            let selection = ShotMapSelection::new(League::Epl, season.clone(), "Bench Player");
            let _ = ShotMap::build(selection, black_box(&batch), black_box(&config))
                .expect("build should succeed");
        })
    });
}

criterion_group!(benches, bench_normalize_10k, bench_shot_map_build_10k);
criterion_main!(benches);
