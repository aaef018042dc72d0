//! Per-claim stage timeline construction.

use chrono::{DateTime, Utc};

use crate::math::days_between;
use crate::model::{ClaimRecord, ClaimTimeline, StageMetric};

/// Build one claim's duration-annotated timeline against an explicit
/// observation instant.
///
/// Stage order is preserved verbatim; callers supply stages in
/// chronological entry order and this function does not re-sort. Open
/// stages and open claims measure against `now`, so a fixed `now` makes
/// the result deterministic.
#[must_use]
pub fn timeline_at(claim: &ClaimRecord, now: DateTime<Utc>) -> ClaimTimeline {
    let stages = claim
        .stages
        .iter()
        .map(|record| StageMetric {
            stage: record.stage.clone(),
            entered_at: record.entered_at,
            exited_at: record.exited_at,
            duration_days: days_between(record.entered_at, record.exited_at.unwrap_or(now)),
        })
        .collect();

    ClaimTimeline {
        claim_id: claim.id.clone(),
        claim_number: claim.claim_number.clone(),
        carrier: claim.carrier.clone(),
        stages,
        total_days: days_between(claim.created_at, claim.closed_at.unwrap_or(now)),
        status: claim.status.clone(),
    }
}

/// Single-claim public entry point for detail views: captures the wall
/// clock once and delegates to [`timeline_at`].
#[must_use]
pub fn build_claim_timeline(claim: &ClaimRecord) -> ClaimTimeline {
    timeline_at(claim, Utc::now())
}
