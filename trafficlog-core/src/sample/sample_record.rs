use std::fmt::Display;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{congestion::CongestionStatus, model::Coordinate};

/// one logical measurement round, as written to the sample log.
///
/// samples are only built by [`super::assemble`] (or read back from a log), which
/// guarantees that `difference_seconds` and `difference_percent` are present exactly
/// when both durations are present and the baseline is positive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Sample {
    #[serde(with = "super::timestamp_codec")]
    timestamp: NaiveDateTime,
    start_point: Option<Coordinate>,
    end_point: Option<Coordinate>,
    duration_with_traffic_minutes: Option<f64>,
    duration_no_traffic_minutes: Option<f64>,
    congestion_status: Option<CongestionStatus>,
    difference_seconds: Option<i64>,
    difference_percent: Option<f64>,
}

impl Sample {
    /// column names of a sample log, in order.
    pub const COLUMNS: [&'static str; 8] = [
        "timestamp",
        "start_point",
        "end_point",
        "duration_with_traffic_minutes",
        "duration_no_traffic_minutes",
        "congestion_status",
        "difference_seconds",
        "difference_percent",
    ];

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        timestamp: NaiveDateTime,
        start_point: Option<Coordinate>,
        end_point: Option<Coordinate>,
        duration_with_traffic_minutes: Option<f64>,
        duration_no_traffic_minutes: Option<f64>,
        congestion_status: Option<CongestionStatus>,
        difference_seconds: Option<i64>,
        difference_percent: Option<f64>,
    ) -> Sample {
        Sample {
            timestamp: truncate_to_seconds(timestamp),
            start_point,
            end_point,
            duration_with_traffic_minutes,
            duration_no_traffic_minutes,
            congestion_status,
            difference_seconds,
            difference_percent,
        }
    }

    /// a sample with every measurement absent, used when a round produced nothing.
    pub fn empty(timestamp: NaiveDateTime) -> Sample {
        Sample::new(timestamp, None, None, None, None, None, None, None)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn start_point(&self) -> Option<Coordinate> {
        self.start_point
    }

    pub fn end_point(&self) -> Option<Coordinate> {
        self.end_point
    }

    pub fn duration_with_traffic_minutes(&self) -> Option<f64> {
        self.duration_with_traffic_minutes
    }

    pub fn duration_no_traffic_minutes(&self) -> Option<f64> {
        self.duration_no_traffic_minutes
    }

    pub fn congestion_status(&self) -> Option<CongestionStatus> {
        self.congestion_status
    }

    pub fn difference_seconds(&self) -> Option<i64> {
        self.difference_seconds
    }

    pub fn difference_percent(&self) -> Option<f64> {
        self.difference_percent
    }

    /// true when no measurement field is present.
    pub fn is_empty(&self) -> bool {
        self.start_point.is_none()
            && self.end_point.is_none()
            && self.duration_with_traffic_minutes.is_none()
            && self.duration_no_traffic_minutes.is_none()
            && self.congestion_status.is_none()
    }
}

fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

fn or_dash<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("-"),
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "timestamp={} start_point={} end_point={} duration_with_traffic_minutes={} duration_no_traffic_minutes={} congestion_status={} difference_seconds={} difference_percent={}",
            self.timestamp.format(super::timestamp_codec::TIMESTAMP_FORMAT),
            or_dash(&self.start_point),
            or_dash(&self.end_point),
            or_dash(&self.duration_with_traffic_minutes),
            or_dash(&self.duration_no_traffic_minutes),
            or_dash(&self.congestion_status),
            or_dash(&self.difference_seconds),
            or_dash(&self.difference_percent),
        )
    }
}
