//! Per-carrier closing-speed and supplement-turnaround benchmarks.

use crate::grouping::OrderedGroups;
use crate::math::{average, days_between, percent_of, round1};
use crate::model::{CarrierBenchmark, ClaimRecord};

/// Group label for claims with no carrier on record.
pub const UNKNOWN_CARRIER: &str = "Unknown";

/// Supplement statuses that count toward the approval rate.
const APPROVED_STATUSES: [&str; 2] = ["APPROVED", "PAID"];

/// Group claims by carrier and compute each carrier's closing speed,
/// supplement turnaround, and approval rate.
///
/// `claim_count` counts only the closed claims backing the close-time
/// average; a carrier with many open claims and few closed ones reports a
/// small count. Output is sorted descending by `claim_count` with a stable
/// sort, so ties keep first-seen carrier order.
#[must_use]
pub fn carrier_benchmarks(claims: &[ClaimRecord]) -> Vec<CarrierBenchmark> {
    tracing::debug!(claims = claims.len(), "Entering carrier_benchmarks");

    let mut groups: OrderedGroups<&ClaimRecord> = OrderedGroups::new();
    for claim in claims {
        groups.push(claim.carrier.as_deref().unwrap_or(UNKNOWN_CARRIER), claim);
    }

    let mut benchmarks: Vec<CarrierBenchmark> = groups
        .iter()
        .map(|(carrier, members)| benchmark_group(carrier, members))
        .collect();
    benchmarks.sort_by(|a, b| b.claim_count.cmp(&a.claim_count));
    benchmarks
}

fn benchmark_group(carrier: &str, members: &[&ClaimRecord]) -> CarrierBenchmark {
    let close_days: Vec<f64> = members
        .iter()
        .filter_map(|claim| {
            claim
                .closed_at
                .map(|closed| days_between(claim.created_at, closed))
        })
        .collect();

    let mut response_days = Vec::new();
    let mut approved = 0usize;
    let mut supplement_total = 0usize;
    for claim in members {
        for supplement in &claim.supplements {
            supplement_total += 1;
            if APPROVED_STATUSES.contains(&supplement.status.as_str()) {
                approved += 1;
            }
            if let (Some(submitted), Some(responded)) =
                (supplement.submitted_at, supplement.responded_at)
            {
                response_days.push(days_between(submitted, responded));
            }
        }
    }

    CarrierBenchmark {
        carrier: carrier.to_owned(),
        avg_days_to_close: round1(average(&close_days)),
        avg_supplement_response_days: round1(average(&response_days)),
        claim_count: close_days.len(),
        approval_rate: percent_of(approved as f64, supplement_total as f64),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::model::SupplementRecord;

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, n, 0, 0, 0).unwrap()
    }

    fn claim(id: &str, carrier: Option<&str>, closed: Option<u32>) -> ClaimRecord {
        ClaimRecord {
            id: id.to_owned(),
            claim_number: format!("CV-{id}"),
            carrier: carrier.map(str::to_owned),
            status: if closed.is_some() { "CLOSED" } else { "OPEN" }.to_owned(),
            created_at: day(1),
            closed_at: closed.map(day),
            total_value: 0.0,
            stages: Vec::new(),
            supplements: Vec::new(),
        }
    }

    fn supplement(status: &str, submitted: Option<u32>, responded: Option<u32>) -> SupplementRecord {
        SupplementRecord {
            submitted_at: submitted.map(day),
            responded_at: responded.map(day),
            status: status.to_owned(),
            amount: 1000.0,
        }
    }

    #[test]
    fn null_carriers_group_under_unknown() {
        let claims = vec![
            claim("1", None, Some(5)),
            claim("2", None, None),
            claim("3", Some("AAA"), Some(9)),
        ];
        let benchmarks = carrier_benchmarks(&claims);
        assert_eq!(benchmarks.len(), 2, "exactly one Unknown and one AAA group");
        let unknown = benchmarks
            .iter()
            .find(|b| b.carrier == UNKNOWN_CARRIER)
            .expect("Unknown group present");
        assert_eq!(unknown.claim_count, 1, "only the closed member counts");
    }

    #[test]
    fn claim_count_reflects_closed_claims_not_group_size() {
        let claims = vec![
            claim("1", Some("USAA"), None),
            claim("2", Some("USAA"), None),
            claim("3", Some("USAA"), Some(11)),
        ];
        let benchmarks = carrier_benchmarks(&claims);
        assert_eq!(benchmarks[0].claim_count, 1);
        assert_eq!(benchmarks[0].avg_days_to_close, 10.0);
    }

    #[test]
    fn approval_rate_counts_approved_and_paid_statuses() {
        let mut subject = claim("1", Some("USAA"), Some(10));
        subject.supplements = vec![
            supplement("APPROVED", Some(2), Some(4)),
            supplement("PAID", Some(3), Some(5)),
            supplement("DENIED", Some(4), None),
            supplement("PENDING", None, None),
        ];
        let benchmarks = carrier_benchmarks(&[subject]);
        assert_eq!(benchmarks[0].approval_rate, 50, "2 of 4 approved or paid");
        // Only the two fully-dated supplements feed the response average.
        assert_eq!(benchmarks[0].avg_supplement_response_days, 2.0);
    }

    #[test]
    fn approval_rate_is_zero_without_supplements() {
        let benchmarks = carrier_benchmarks(&[claim("1", Some("USAA"), Some(10))]);
        assert_eq!(benchmarks[0].approval_rate, 0);
        assert_eq!(benchmarks[0].avg_supplement_response_days, 0.0);
    }

    #[test]
    fn output_sorts_descending_by_claim_count_with_stable_ties() {
        let claims = vec![
            claim("1", Some("Allstate"), None),
            claim("2", Some("USAA"), Some(5)),
            claim("3", Some("USAA"), Some(7)),
            claim("4", Some("Liberty"), None),
        ];
        let order: Vec<String> = carrier_benchmarks(&claims)
            .into_iter()
            .map(|b| b.carrier)
            .collect();
        // Allstate and Liberty tie at zero closed claims; first-seen wins.
        assert_eq!(order, vec!["USAA", "Allstate", "Liberty"]);
    }

    #[test]
    fn empty_collection_yields_no_benchmarks() {
        assert!(carrier_benchmarks(&[]).is_empty());
    }
}
