//! Snapshot composition: the single aggregate entry point over a claim
//! collection and a lookback window.

use chrono::{DateTime, Utc};

use crate::benchmark::carrier_benchmarks;
use crate::bottleneck::detect_bottlenecks_at;
use crate::math::{average, days_between, median, round1};
use crate::model::{ClaimRecord, VelocitySnapshot};
use crate::trend::{partition_closed, trend_from_partition};

/// Lookback window applied when the caller has no explicit preference.
pub const DEFAULT_PERIOD_DAYS: i64 = 90;

/// Compute the full velocity snapshot against an explicit observation
/// instant.
///
/// The closed-claim partition is computed once and reused: headline
/// velocity (mean and median) covers only claims closed inside the current
/// window, and `revenue_per_day` divides that window's closed claim value
/// by the window length. Supplement turnaround deliberately spans every
/// supplied claim regardless of window.
///
/// Degenerate input never fails: an empty collection produces all-zero
/// numerics, empty benchmark/bottleneck lists, and a stable trend.
#[must_use]
pub fn snapshot_at(
    claims: &[ClaimRecord],
    period_days: i64,
    now: DateTime<Utc>,
) -> VelocitySnapshot {
    tracing::debug!(claims = claims.len(), period_days, "Entering snapshot_at");

    let partition = partition_closed(claims, period_days, now);
    let current_cycle_days: Vec<f64> = partition
        .current
        .iter()
        .map(|closed| closed.cycle_days)
        .collect();

    let response_days: Vec<f64> = claims
        .iter()
        .flat_map(|claim| &claim.supplements)
        .filter_map(|supplement| match (supplement.submitted_at, supplement.responded_at) {
            (Some(submitted), Some(responded)) => Some(days_between(submitted, responded)),
            _ => None,
        })
        .collect();

    let closed_value: f64 = partition
        .current
        .iter()
        .map(|closed| closed.claim.total_value)
        .sum();
    let revenue_per_day = if period_days <= 0 {
        0
    } else {
        (closed_value / period_days as f64).round() as i64
    };

    let snapshot = VelocitySnapshot {
        avg_claim_velocity_days: round1(average(&current_cycle_days)),
        median_claim_velocity_days: round1(median(&current_cycle_days)),
        avg_supplement_response_days: round1(average(&response_days)),
        revenue_per_day,
        carrier_benchmarks: carrier_benchmarks(claims),
        bottlenecks: detect_bottlenecks_at(claims, now),
        trend: trend_from_partition(&partition),
    };

    tracing::info!(
        closed_claims = partition.current.len(),
        avg_days = snapshot.avg_claim_velocity_days,
        carriers = snapshot.carrier_benchmarks.len(),
        direction = snapshot.trend.direction.as_str(),
        "Velocity snapshot computed"
    );
    snapshot
}

/// Public aggregate entry point: captures the wall clock exactly once so
/// every sub-computation inside one snapshot shares the same "now".
#[must_use]
pub fn calculate_velocity_snapshot(claims: &[ClaimRecord], period_days: i64) -> VelocitySnapshot {
    snapshot_at(claims, period_days, Utc::now())
}
