//! Period-over-period velocity comparison.

use chrono::{DateTime, Duration, Utc};

use crate::math::{average, days_between, round1};
use crate::model::{ClaimRecord, TrendComparison, TrendDirection};

/// Change magnitude (percent) below which the trend reads as stable.
const STABLE_BAND_PERCENT: f64 = 5.0;

/// A closed claim bucketed into a velocity window, carrying its
/// intake-to-close span so downstream consumers never re-derive it.
#[derive(Debug, Clone, Copy)]
pub struct ClosedClaim<'a> {
    pub claim: &'a ClaimRecord,
    pub cycle_days: f64,
}

/// Closed claims split into the current lookback window and the
/// immediately preceding window of equal length.
#[derive(Debug)]
pub struct ClosedPartition<'a> {
    pub current: Vec<ClosedClaim<'a>>,
    pub previous: Vec<ClosedClaim<'a>>,
}

/// Bucket closed claims around `now`.
///
/// `[now - period_days, now]` is the current window; the equal-length
/// window before it is the previous one. Open claims and claims closed
/// before both windows are dropped.
#[must_use]
pub fn partition_closed(
    claims: &[ClaimRecord],
    period_days: i64,
    now: DateTime<Utc>,
) -> ClosedPartition<'_> {
    let period_start = now - Duration::days(period_days);
    let previous_period_start = period_start - Duration::days(period_days);

    let mut partition = ClosedPartition {
        current: Vec::new(),
        previous: Vec::new(),
    };
    for claim in claims {
        let Some(closed_at) = claim.closed_at else {
            continue;
        };
        let entry = ClosedClaim {
            claim,
            cycle_days: days_between(claim.created_at, closed_at),
        };
        if closed_at >= period_start {
            partition.current.push(entry);
        } else if closed_at >= previous_period_start {
            partition.previous.push(entry);
        }
    }
    partition
}

/// Classify the velocity change between the two windows of a partition.
///
/// `change_percent` is 0 when the previous window has no closed claims, and
/// is rounded to one decimal before classification so the displayed number
/// and the displayed direction always agree. Fewer days is `faster`.
#[must_use]
pub fn trend_from_partition(partition: &ClosedPartition<'_>) -> TrendComparison {
    let current_avg = average(&cycle_days(&partition.current));
    let previous_avg = average(&cycle_days(&partition.previous));

    let change_percent = if previous_avg > 0.0 {
        round1((current_avg - previous_avg) / previous_avg * 100.0)
    } else {
        0.0
    };
    let direction = if change_percent.abs() < STABLE_BAND_PERCENT {
        TrendDirection::Stable
    } else if change_percent < 0.0 {
        TrendDirection::Faster
    } else {
        TrendDirection::Slower
    };

    TrendComparison {
        current_period_avg_days: current_avg,
        previous_period_avg_days: previous_avg,
        change_percent,
        direction,
    }
}

/// Full-collection convenience entry: partition once, then compare.
#[must_use]
pub fn compare_trend_at(
    claims: &[ClaimRecord],
    period_days: i64,
    now: DateTime<Utc>,
) -> TrendComparison {
    trend_from_partition(&partition_closed(claims, period_days, now))
}

fn cycle_days(bucket: &[ClosedClaim<'_>]) -> Vec<f64> {
    bucket.iter().map(|closed| closed.cycle_days).collect()
}
