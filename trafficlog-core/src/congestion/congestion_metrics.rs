use serde::{Deserialize, Serialize};

use super::CongestionStatus;

/// the congestion metric of one sampling round. only ever built as a whole, so a
/// round either has a status along with both difference values or has none of them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CongestionMetrics {
    pub status: CongestionStatus,
    /// traffic-aware minus traffic-unaware duration. negative when traffic is
    /// lighter than the baseline.
    pub difference_seconds: i64,
    /// `difference_seconds` relative to the baseline, in percent, rounded to
    /// [`super::congestion_ops::PERCENT_DECIMAL_PLACES`] places.
    pub difference_percent: f64,
}
