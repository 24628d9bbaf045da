use chrono::NaiveDateTime;

use super::{RawRound, Sample};
use crate::congestion::{classify, congestion_ops::seconds_to_minutes};

/// assembles the record of one sampling round.
///
/// the start and end points come from the traffic-aware measurement, so when that
/// measurement is missing they are absent along with its duration. the congestion
/// metric is derived from the original second values of both measurements, never
/// from the rounded minutes that end up in the record.
///
/// # Arguments
/// * `raw` - the measurements collected during the round
/// * `captured_at` - capture time of the round, truncated to whole seconds
///
/// # Result
/// a sample with absent fields for whatever could not be measured. assembling
/// never fails.
pub fn assemble(raw: &RawRound, captured_at: NaiveDateTime) -> Sample {
    let aware = raw.traffic_aware.as_ref();
    let unaware = raw.traffic_unaware.as_ref();
    let aware_seconds = aware.map(|m| m.duration_seconds);
    let unaware_seconds = unaware.map(|m| m.duration_seconds);
    let metrics = classify(aware_seconds, unaware_seconds);

    Sample::new(
        captured_at,
        aware.and_then(|m| m.start_point),
        aware.and_then(|m| m.end_point),
        aware_seconds.map(seconds_to_minutes),
        unaware_seconds.map(seconds_to_minutes),
        metrics.map(|m| m.status),
        metrics.map(|m| m.difference_seconds),
        metrics.map(|m| m.difference_percent),
    )
}

#[cfg(test)]
mod test {
    use super::assemble;
    use crate::{
        congestion::CongestionStatus,
        model::{Coordinate, RouteMeasurement},
        sample::{RawRound, Sample},
    };
    use chrono::{NaiveDate, NaiveDateTime};

    fn captured_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 3)
            .and_then(|d| d.and_hms_milli_opt(17, 5, 0, 250))
            .expect("valid test timestamp")
    }

    fn taipei_round() -> RawRound {
        let start = Coordinate::new(25.0478, 121.517);
        let end = Coordinate::new(25.0336, 121.5646);
        RawRound {
            traffic_aware: Some(
                RouteMeasurement::new(900)
                    .with_endpoints(Some(start), Some(end))
                    .with_distance_meters(Some(6152.0)),
            ),
            traffic_unaware: Some(RouteMeasurement::new(700)),
            errors: vec![],
        }
    }

    #[test]
    fn test_assemble_full_round() {
        let sample = assemble(&taipei_round(), captured_at());
        assert_eq!(sample.start_point(), Some(Coordinate::new(25.0478, 121.517)));
        assert_eq!(sample.end_point(), Some(Coordinate::new(25.0336, 121.5646)));
        assert_eq!(sample.duration_with_traffic_minutes(), Some(15.0));
        assert_eq!(sample.duration_no_traffic_minutes(), Some(11.67));
        assert_eq!(sample.congestion_status(), Some(CongestionStatus::Moderate));
        assert_eq!(sample.difference_seconds(), Some(200));
        assert_eq!(sample.difference_percent(), Some(28.57));
        assert_eq!(
            sample.timestamp().format("%H:%M:%S%.3f").to_string(),
            "17:05:00.000"
        );
    }

    #[test]
    fn test_assemble_without_traffic_aware() {
        let mut raw = taipei_round();
        raw.traffic_aware = None;
        let sample = assemble(&raw, captured_at());
        assert_eq!(sample.start_point(), None);
        assert_eq!(sample.end_point(), None);
        assert_eq!(sample.duration_with_traffic_minutes(), None);
        assert_eq!(sample.duration_no_traffic_minutes(), Some(11.67));
        assert_eq!(sample.congestion_status(), None);
        assert_eq!(sample.difference_seconds(), None);
        assert_eq!(sample.difference_percent(), None);
    }

    #[test]
    fn test_assemble_with_zero_baseline() {
        let mut raw = taipei_round();
        raw.traffic_unaware = Some(RouteMeasurement::new(0));
        let sample = assemble(&raw, captured_at());
        assert_eq!(sample.duration_with_traffic_minutes(), Some(15.0));
        assert_eq!(sample.duration_no_traffic_minutes(), Some(0.0));
        assert_eq!(sample.congestion_status(), None);
        assert_eq!(sample.difference_seconds(), None);
        assert_eq!(sample.difference_percent(), None);
    }

    #[test]
    fn test_difference_uses_seconds_not_minutes() {
        // 61s and 59s round to 1.02 and 0.98 minutes; re-deriving from those would give 2.4s
        let raw = RawRound {
            traffic_aware: Some(RouteMeasurement::new(61)),
            traffic_unaware: Some(RouteMeasurement::new(59)),
            errors: vec![],
        };
        let sample = assemble(&raw, captured_at());
        assert_eq!(sample.duration_with_traffic_minutes(), Some(1.02));
        assert_eq!(sample.duration_no_traffic_minutes(), Some(0.98));
        assert_eq!(sample.difference_seconds(), Some(2));
        assert_eq!(sample.difference_percent(), Some(3.39));
    }

    #[test]
    fn test_assemble_failed_round_is_empty() {
        let raw = RawRound::failed(vec![String::from("timeout")]);
        let sample = assemble(&raw, captured_at());
        assert!(sample.is_empty());
        assert_eq!(sample, Sample::empty(captured_at()));
    }

    #[test]
    fn test_csv_header_and_empty_fields() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .serialize(Sample::empty(captured_at()))
            .expect("should serialize");
        let bytes = writer.into_inner().expect("should flush");
        let text = String::from_utf8(bytes).expect("utf-8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(Sample::COLUMNS.join(",").as_str()));
        assert_eq!(lines.next(), Some("2025-06-03 17:05:00,,,,,,,"));
        assert_eq!(lines.next(), None);
    }
}
