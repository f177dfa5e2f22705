//! Benchmarks for the query pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic pool so the benchmark needs no data files.

use candidate_store::{Candidate, Dimension};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{export_csv, run, QueryConfig, SortMode};

const SKILLS: [&str; 6] = ["React", "Go", "Rust", "Python", "Kotlin", "SQL"];
const LOCATIONS: [&str; 4] = ["Remote", "Berlin", "London", "Lisbon"];
const BANDS: [&str; 4] = ["0-2 years", "3-5 years", "6-9 years", "10+ years"];

fn synthetic_pool(size: usize) -> Vec<Candidate> {
    let base = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| Candidate {
            id: format!("c-{i}"),
            name: format!("Candidate {i:05}"),
            title: "Software Engineer".to_string(),
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            experience_band: BANDS[i % BANDS.len()].to_string(),
            skills: vec![
                SKILLS[i % SKILLS.len()].to_string(),
                SKILLS[(i / 3) % SKILLS.len()].to_string(),
            ],
            date_added: base + Duration::minutes(i as i64 * 37 % 100_000),
            ..Default::default()
        })
        .collect()
}

fn bench_run_default(c: &mut Criterion) {
    let pool = synthetic_pool(5_000);
    let config = QueryConfig::default();

    c.bench_function("run_default_config", |b| {
        b.iter(|| black_box(run(black_box(&pool), &config).len()))
    });
}

fn bench_run_filtered(c: &mut Criterion) {
    let pool = synthetic_pool(5_000);
    let mut config = QueryConfig {
        query: "engineer".to_string(),
        sort_mode: SortMode::Experience,
        ..Default::default()
    };
    config.filters.toggle(Dimension::Skills, "Rust");
    config.filters.toggle(Dimension::Locations, "Remote");

    c.bench_function("run_text_filters_experience_sort", |b| {
        b.iter(|| black_box(run(black_box(&pool), &config).len()))
    });
}

fn bench_export(c: &mut Criterion) {
    let pool = synthetic_pool(1_000);
    let results: Vec<&Candidate> = pool.iter().collect();

    c.bench_function("export_csv_1000", |b| {
        b.iter(|| black_box(export_csv(black_box(&results))))
    });
}

criterion_group!(benches, bench_run_default, bench_run_filtered, bench_export);
criterion_main!(benches);
