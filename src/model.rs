use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input records (owned by the data-access collaborator)
// ---------------------------------------------------------------------------

/// One stage occurrence in a claim's lifecycle.
///
/// `exited_at = None` means the claim is currently sitting in this stage.
/// Stage names are free-form strings; aggregation never rejects a name it
/// does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub stage: String,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}

/// A supplemental payment request submitted to a carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRecord {
    pub submitted_at: Option<DateTime<Utc>>,
    pub responded_at: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub amount: f64,
}

/// A fully materialized claim as supplied by the data-access layer.
///
/// The engine performs no validation beyond null-coalescing; malformed
/// timestamps are the caller's responsibility and surface as negative
/// durations downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: String,
    pub claim_number: String,
    /// Absent carrier groups under the literal `"Unknown"` bucket.
    pub carrier: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// The claim is open until this is set.
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub stages: Vec<StageRecord>,
    #[serde(default)]
    pub supplements: Vec<SupplementRecord>,
}

// ---------------------------------------------------------------------------
// Derived results
// ---------------------------------------------------------------------------

/// Duration-annotated view of one stage occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageMetric {
    pub stage: String,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
    /// Fractional days spent in the stage; open stages measure against the
    /// snapshot's observation instant.
    pub duration_days: f64,
}

/// One claim's normalized timeline for detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTimeline {
    pub claim_id: String,
    pub claim_number: String,
    pub carrier: Option<String>,
    /// Stages in the order the claim record supplied them.
    pub stages: Vec<StageMetric>,
    /// Claim age if still open, intake-to-close span otherwise.
    pub total_days: f64,
    pub status: String,
}

/// Closing-speed and supplement-turnaround profile for one carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierBenchmark {
    pub carrier: String,
    pub avg_days_to_close: f64,
    pub avg_supplement_response_days: f64,
    /// Closed claims contributing to the close-time average; open claims in
    /// the group do not count here.
    pub claim_count: usize,
    /// Whole-number percentage of supplements approved or paid, 0 when the
    /// carrier has no supplements on record.
    pub approval_rate: u32,
}

/// A workflow stage ranked by average time consumed across all claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottleneck {
    pub stage: String,
    pub avg_days: f64,
    /// This stage's average as a whole-number percentage of the sum of all
    /// stages' averages.
    pub percent_of_total: u32,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Faster,
    Slower,
    Stable,
}

impl TrendDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Faster => "faster",
            Self::Slower => "slower",
            Self::Stable => "stable",
        }
    }
}

/// Period-over-period closing-speed comparison.
///
/// The two averages are exposed unrounded here; the snapshot fields that
/// mirror them round to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendComparison {
    pub current_period_avg_days: f64,
    pub previous_period_avg_days: f64,
    /// Signed, one decimal; 0 when the previous period has no closed claims.
    pub change_percent: f64,
    pub direction: TrendDirection,
}

/// Aggregate output of one snapshot invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocitySnapshot {
    /// Mean intake-to-close days over claims closed in the current window.
    pub avg_claim_velocity_days: f64,
    pub median_claim_velocity_days: f64,
    /// Spans every supplement of every supplied claim, not just the current
    /// window. Supplement turnaround is the slower-moving metric and keeps
    /// its full history while headline velocity is period-filtered.
    pub avg_supplement_response_days: f64,
    /// Total value of current-window closed claims divided by the window
    /// length, rounded to the nearest whole unit.
    pub revenue_per_day: i64,
    /// Descending by `claim_count`; ties keep first-seen carrier order.
    pub carrier_benchmarks: Vec<CarrierBenchmark>,
    /// Descending by `avg_days`.
    pub bottlenecks: Vec<Bottleneck>,
    pub trend: TrendComparison,
}
