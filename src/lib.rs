#![forbid(unsafe_code)]

pub mod benchmark;
pub mod bottleneck;
pub mod grouping;
pub mod logging;
pub mod math;
pub mod model;
pub mod snapshot;
pub mod timeline;
pub mod trend;

pub use model::{
    Bottleneck, CarrierBenchmark, ClaimRecord, ClaimTimeline, StageMetric, StageRecord,
    SupplementRecord, TrendComparison, TrendDirection, VelocitySnapshot,
};
pub use snapshot::{DEFAULT_PERIOD_DAYS, calculate_velocity_snapshot, snapshot_at};
pub use timeline::{build_claim_timeline, timeline_at};
