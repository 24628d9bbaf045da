use std::fmt::Display;

use itertools::Itertools;
use trafficlog_core::{
    model::{Coordinate, RouteMeasurement},
    sample::{timestamp_codec::TIMESTAMP_FORMAT, RawRound, Sample},
};

use super::ReportParser;

/// the human-readable report of a single round, as printed by `trafficlog probe`.
/// the output can be read back with [`ReportParser`].
pub struct RouteReport<'a> {
    raw: &'a RawRound,
    sample: &'a Sample,
}

impl<'a> RouteReport<'a> {
    pub const TITLE: &'static str = "=== Routes API Congestion Quantifier ===";

    pub fn new(raw: &'a RawRound, sample: &'a Sample) -> RouteReport<'a> {
        RouteReport { raw, sample }
    }

    fn lines(&self) -> Vec<String> {
        let aware = self.raw.traffic_aware.as_ref();
        let mut lines = vec![
            String::from(Self::TITLE),
            format!(
                "{} {}",
                ReportParser::TIME_PREFIX,
                self.sample.timestamp().format(TIMESTAMP_FORMAT)
            ),
        ];
        if let Some(point) = self.sample.start_point() {
            lines.push(format!("{} {}", ReportParser::FROM_PREFIX, point_text(&point)));
        }
        if let Some(point) = self.sample.end_point() {
            lines.push(format!("{}   {}", ReportParser::TO_PREFIX, point_text(&point)));
        }
        if let Some(km) = aware.and_then(RouteMeasurement::distance_km) {
            lines.push(format!("{} {km:.2} km", ReportParser::DISTANCE_PREFIX));
        }
        if let Some(m) = aware {
            lines.push(duration_line(ReportParser::WITH_TRAFFIC_PREFIX, m));
        }
        if let Some(m) = self.raw.traffic_unaware.as_ref() {
            lines.push(duration_line(ReportParser::NO_TRAFFIC_PREFIX, m));
        }
        if let Some(m) = aware.filter(|m| !m.labels.is_empty()) {
            let labels = m.labels.iter().map(|l| format!("'{l}'")).join(", ");
            lines.push(format!("{} [{labels}]", ReportParser::LABELS_PREFIX));
        }
        match (
            self.sample.congestion_status(),
            self.sample.difference_percent(),
        ) {
            (Some(status), Some(percent)) => {
                lines.push(format!("Traffic condition: {status} ({percent:.1}%)"))
            }
            _ => lines.push(String::from("Could not estimate traffic condition.")),
        }
        for error in self.raw.errors.iter() {
            lines.push(format!("Error: {error}"));
        }
        lines
    }
}

fn point_text(point: &Coordinate) -> String {
    format!(
        "{{'latitude': {}, 'longitude': {}}}",
        point.latitude, point.longitude
    )
}

fn duration_line(prefix: &str, measurement: &RouteMeasurement) -> String {
    format!(
        "{prefix} {} seconds ({:.2} minutes)",
        measurement.duration_seconds,
        measurement.duration_seconds as f64 / 60.0
    )
}

impl Display for RouteReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().iter().join("\n"))
    }
}
