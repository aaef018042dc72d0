//! Performance benchmarks for the aggregation hot paths.
//!
//! Covers full snapshot composition over growing claim collections and
//! single-claim timeline construction (the per-request detail view).

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use claim_velocity::model::{ClaimRecord, StageRecord, SupplementRecord};
use claim_velocity::{snapshot_at, timeline_at};

/// Fixed observation instant so runs are comparable.
fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap()
}

/// Build a deterministic synthetic collection: a mix of open and closed
/// claims across a handful of carriers, each with a short stage history
/// and one supplement.
fn synthetic_claims(count: usize) -> Vec<ClaimRecord> {
    const CARRIERS: [&str; 4] = ["USAA", "Allstate", "Liberty", "StateFarm"];

    (0..count)
        .map(|i| {
            let created_at = anchor() - Duration::days(20 + (i as i64 % 180));
            let closed = i % 3 != 0;
            let closed_at = closed.then(|| created_at + Duration::days(8 + (i as i64 % 30)));
            ClaimRecord {
                id: format!("clm_{i}"),
                claim_number: format!("CV-{i:05}"),
                carrier: (i % 5 != 0).then(|| CARRIERS[i % CARRIERS.len()].to_owned()),
                status: if closed { "CLOSED" } else { "OPEN" }.to_owned(),
                created_at,
                closed_at,
                total_value: 2500.0 + (i as f64 % 17.0) * 400.0,
                stages: vec![
                    StageRecord {
                        stage: "INTAKE".to_owned(),
                        entered_at: created_at,
                        exited_at: Some(created_at + Duration::days(2)),
                    },
                    StageRecord {
                        stage: "REPAIR".to_owned(),
                        entered_at: created_at + Duration::days(2),
                        exited_at: closed_at,
                    },
                ],
                supplements: vec![SupplementRecord {
                    submitted_at: Some(created_at + Duration::days(3)),
                    responded_at: (i % 4 != 0).then(|| created_at + Duration::days(6)),
                    status: if i % 2 == 0 { "APPROVED" } else { "PENDING" }.to_owned(),
                    amount: 900.0,
                }],
            }
        })
        .collect()
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for size in [10usize, 100, 1_000] {
        let claims = synthetic_claims(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &claims, |b, claims| {
            b.iter(|| snapshot_at(claims, 90, anchor()));
        });
    }
    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let claims = synthetic_claims(1);
    c.bench_function("timeline_single_claim", |b| {
        b.iter(|| timeline_at(&claims[0], anchor()));
    });
}

criterion_group!(benches, bench_snapshot, bench_timeline);
criterion_main!(benches);
