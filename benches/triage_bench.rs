//! Criterion benchmarks for u-triage scoring and ranking.
//!
//! Uses deterministic synthetic batches so runs are comparable; no
//! randomness is involved anywhere in the crate or the benchmarks.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use u_triage::api::analyze_json_at;
use u_triage::model::{Strategy, Task};
use u_triage::scoring::rank;

// ===========================================================================
// Synthetic batches
// ===========================================================================

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

/// Builds `n` tasks with varied due dates, efforts, importances, and a
/// dependency edge on every third task.
fn synthetic_batch(n: usize) -> Vec<Task> {
    (0..n)
        .map(|i| {
            let due = eval_date() + Duration::days((i % 30) as i64 - 2);
            let mut task = Task::new(
                format!("task-{i}"),
                due,
                (i % 12 + 1) as i64,
                (i % 10 + 1) as i64,
            )
            .with_id(i as i64);
            if i % 3 == 0 {
                task = task.with_dependencies(vec![((i + 1) % n) as i64, ((i + 7) % n) as i64]);
            }
            task
        })
        .collect()
}

fn synthetic_payload(n: usize) -> String {
    let records: Vec<serde_json::Value> = synthetic_batch(n)
        .into_iter()
        .map(|t| {
            json!({
                "id": t.id,
                "title": t.title,
                "due_date": t.due_date.to_string(),
                "estimated_hours": t.estimated_hours,
                "importance": t.importance,
                "dependencies": t.dependencies
            })
        })
        .collect();
    json!({ "tasks": records, "strategy": "smart" }).to_string()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_rank_smart(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_smart");

    for &n in &[10usize, 100, 1000] {
        let batch = synthetic_batch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| {
                let ranked = rank(Strategy::Smart, black_box(batch), eval_date());
                black_box(ranked)
            })
        });
    }
    group.finish();
}

fn bench_rank_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_strategies");
    let batch = synthetic_batch(100);

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.name()),
            &batch,
            |b, batch| {
                b.iter(|| {
                    let ranked = rank(strategy, black_box(batch), eval_date());
                    black_box(ranked)
                })
            },
        );
    }
    group.finish();
}

fn bench_analyze_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_json");

    for &n in &[10usize, 100, 1000] {
        let payload = synthetic_payload(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &payload, |b, payload| {
            b.iter(|| {
                let response = analyze_json_at(black_box(payload), eval_date());
                black_box(response)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rank_smart,
    bench_rank_strategies,
    bench_analyze_json
);
criterion_main!(benches);
