//! Stage bottleneck ranking across a claim collection.

use chrono::{DateTime, Utc};

use crate::grouping::OrderedGroups;
use crate::math::{average, days_between, percent_of, round1};
use crate::model::{Bottleneck, ClaimRecord};

/// Advisory text per known workflow stage. Pure data; anything outside this
/// vocabulary falls back to [`FALLBACK_SUGGESTION`].
const STAGE_SUGGESTIONS: [(&str, &str); 8] = [
    (
        "INTAKE",
        "Automate document collection at first contact to cut intake dwell time",
    ),
    (
        "INSPECTION",
        "Schedule inspections within 48 hours of intake and batch nearby sites",
    ),
    (
        "ESTIMATE",
        "Use templated scopes for common loss types to speed estimate writing",
    ),
    (
        "APPROVAL",
        "Escalate carrier approvals that stall beyond a week",
    ),
    (
        "REPAIR",
        "Confirm material availability before crews are dispatched",
    ),
    (
        "INVOICING",
        "Generate invoices directly from the approved estimate",
    ),
    (
        "PAYMENT",
        "Follow up on unpaid invoices on a fixed weekly cadence",
    ),
    (
        "CLOSED",
        "Close claims promptly once the final payment posts",
    ),
];

/// Suggestion applied to stage names outside the known vocabulary.
pub const FALLBACK_SUGGESTION: &str = "Review workflow for optimization opportunities";

fn suggestion_for(stage: &str) -> &'static str {
    STAGE_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == stage)
        .map_or(FALLBACK_SUGGESTION, |(_, text)| *text)
}

/// Rank every stage name observed across `claims` by average time consumed.
///
/// Open stage occurrences measure against `now`, so open claims still
/// contribute dwell time. `percent_of_total` is each stage's share of the
/// summed per-stage averages (not of any single claim's total); with each
/// share rounded independently the column sums to roughly 100. Output is
/// sorted descending by `avg_days`.
#[must_use]
pub fn detect_bottlenecks_at(claims: &[ClaimRecord], now: DateTime<Utc>) -> Vec<Bottleneck> {
    tracing::debug!(claims = claims.len(), "Entering detect_bottlenecks_at");

    let mut durations: OrderedGroups<f64> = OrderedGroups::new();
    for claim in claims {
        for stage in &claim.stages {
            durations.push(
                &stage.stage,
                days_between(stage.entered_at, stage.exited_at.unwrap_or(now)),
            );
        }
    }

    let stage_averages: Vec<(&str, f64)> = durations
        .iter()
        .map(|(stage, samples)| (stage, average(samples)))
        .collect();
    let total: f64 = stage_averages.iter().map(|(_, avg)| avg).sum();

    let mut bottlenecks: Vec<Bottleneck> = stage_averages
        .into_iter()
        .map(|(stage, avg)| Bottleneck {
            stage: stage.to_owned(),
            avg_days: round1(avg),
            percent_of_total: percent_of(avg, total),
            suggestion: suggestion_for(stage).to_owned(),
        })
        .collect();
    bottlenecks.sort_by(|a, b| b.avg_days.total_cmp(&a.avg_days));
    bottlenecks
}
