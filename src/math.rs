//! Day-granularity time math shared by every velocity computation.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days elapsed from `start` to `end`, without rounding.
///
/// No guard against `end < start`: corrupt upstream data surfaces as a
/// negative span instead of being silently repaired. Callers measuring open
/// stages pass the snapshot's "now" as `end`.
#[must_use]
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Arithmetic mean; 0 for an empty slice.
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median over a sorted copy; the mean of the two central values for
/// even-length input, 0 for an empty slice.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part` as a whole-number percentage of `whole`; 0 when `whole` is 0 so
/// empty sample sets never divide by zero.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> u32 {
    if whole == 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as u32
}
