use super::{CongestionMetrics, CongestionStatus};

/// decimal places kept for the congestion percentage.
pub const PERCENT_DECIMAL_PLACES: i32 = 2;

/// decimal places kept for durations stored in minutes.
pub const MINUTES_DECIMAL_PLACES: i32 = 2;

/// computes the congestion metric from the traffic-aware and traffic-unaware
/// durations of the same route.
///
/// the percentage is rounded half away from zero to [`PERCENT_DECIMAL_PLACES`]
/// places and the status is assigned from the rounded value, so the stored
/// percentage and the stored status always agree.
///
/// # Arguments
///
/// * `with_traffic_seconds` - traffic-aware duration, if one was measured
/// * `no_traffic_seconds` - traffic-unaware (baseline) duration, if one was measured
///
/// # Returns
///
/// the metric, or None when either duration is missing or the baseline is zero.
pub fn classify(
    with_traffic_seconds: Option<u64>,
    no_traffic_seconds: Option<u64>,
) -> Option<CongestionMetrics> {
    let with_traffic = i64::try_from(with_traffic_seconds?).ok()?;
    let no_traffic = i64::try_from(no_traffic_seconds?).ok()?;
    if no_traffic <= 0 {
        return None;
    }
    let difference_seconds = with_traffic - no_traffic;
    let raw_percent = (difference_seconds as f64 * 100.0) / no_traffic as f64;
    let difference_percent = round_to_places(raw_percent, PERCENT_DECIMAL_PLACES);
    Some(CongestionMetrics {
        status: CongestionStatus::from_percent(difference_percent),
        difference_seconds,
        difference_percent,
    })
}

/// converts whole seconds into minutes rounded to [`MINUTES_DECIMAL_PLACES`].
pub fn seconds_to_minutes(seconds: u64) -> f64 {
    round_to_places(seconds as f64 / 60.0, MINUTES_DECIMAL_PLACES)
}

/// rounds to a fixed number of decimal places, with ties rounded away from zero
/// (0.125 becomes 0.13, -0.125 becomes -0.13).
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
