use chrono::NaiveDateTime;
use regex::Regex;
use trafficlog_core::{
    model::{Coordinate, RouteMeasurement},
    sample::{timestamp_codec::TIMESTAMP_FORMAT, RawRound},
};

use super::ParseError;

/// reads a [`RawRound`] back out of a printed route report.
///
/// fields are found by line prefix. lines that match no known prefix are ignored,
/// since the report layout is not guaranteed to stay the same. a field that cannot
/// be read is left absent and the reason is kept in [`RawRound::errors`].
pub struct ReportParser {
    point: Regex,
    latitude: Regex,
    longitude: Regex,
    seconds: Regex,
    distance: Regex,
}

impl ReportParser {
    pub const TIME_PREFIX: &str = "Time:";
    pub const FROM_PREFIX: &str = "From:";
    pub const TO_PREFIX: &str = "To:";
    pub const WITH_TRAFFIC_PREFIX: &str = "Duration (with traffic):";
    pub const NO_TRAFFIC_PREFIX: &str = "Duration (no traffic):";
    pub const DISTANCE_PREFIX: &str = "Distance:";
    pub const LABELS_PREFIX: &str = "Route labels:";

    /// a `{...}` group mentioning latitude, such as `{'latitude': 25.04, 'longitude': 121.51}`
    const POINT_REGEX: &str = r"\{[^{}]*latitude[^{}]*\}";
    const LATITUDE_REGEX: &str = r#"['"]?latitude['"]?\s*[:=]\s*(-?\d+(?:\.\d+)?)"#;
    const LONGITUDE_REGEX: &str = r#"['"]?longitude['"]?\s*[:=]\s*(-?\d+(?:\.\d+)?)"#;
    /// `900 seconds` or `900s`. the digits may not continue a decimal number, so
    /// `1.5s` does not read as 5 seconds.
    const SECONDS_REGEX: &str = r"(?:^|[^\d.])(\d+)\s*(?:seconds|s)\b";
    const DISTANCE_REGEX: &str = r"(\d+(?:\.\d+)?)\s*km\b";

    pub fn new() -> Result<ReportParser, ParseError> {
        Ok(ReportParser {
            point: Regex::new(Self::POINT_REGEX)?,
            latitude: Regex::new(Self::LATITUDE_REGEX)?,
            longitude: Regex::new(Self::LONGITUDE_REGEX)?,
            seconds: Regex::new(Self::SECONDS_REGEX)?,
            distance: Regex::new(Self::DISTANCE_REGEX)?,
        })
    }

    /// parses one report. never fails: whatever could not be read is absent in
    /// the result.
    pub fn parse(&self, text: &str) -> RawRound {
        let mut from = None;
        let mut to = None;
        let mut with_traffic = None;
        let mut no_traffic = None;
        let mut seen_with_traffic = false;
        let mut seen_no_traffic = false;
        let mut distance_meters = None;
        let mut labels = vec![];
        let mut errors: Vec<ParseError> = vec![];

        for line in text.lines().map(str::trim) {
            if let Some(rest) = line.strip_prefix(Self::FROM_PREFIX) {
                from = self.coordinate(rest).map_err(|e| errors.push(e)).ok();
            } else if let Some(rest) = line.strip_prefix(Self::TO_PREFIX) {
                to = self.coordinate(rest).map_err(|e| errors.push(e)).ok();
            } else if let Some(rest) = line.strip_prefix(Self::WITH_TRAFFIC_PREFIX) {
                seen_with_traffic = true;
                with_traffic = self.duration_seconds(rest).map_err(|e| errors.push(e)).ok();
            } else if let Some(rest) = line.strip_prefix(Self::NO_TRAFFIC_PREFIX) {
                seen_no_traffic = true;
                no_traffic = self.duration_seconds(rest).map_err(|e| errors.push(e)).ok();
            } else if let Some(rest) = line.strip_prefix(Self::DISTANCE_PREFIX) {
                distance_meters = self.distance_meters(rest).map_err(|e| errors.push(e)).ok();
            } else if let Some(rest) = line.strip_prefix(Self::LABELS_PREFIX) {
                labels = route_labels(rest);
            } else if !line.is_empty() {
                log::debug!("ignoring report line '{line}'");
            }
        }

        if !seen_with_traffic {
            errors.push(ParseError::MissingLine(Self::WITH_TRAFFIC_PREFIX));
        }
        if !seen_no_traffic {
            errors.push(ParseError::MissingLine(Self::NO_TRAFFIC_PREFIX));
        }
        for e in errors.iter() {
            log::debug!("route report: {e}");
        }

        RawRound {
            traffic_aware: with_traffic.map(|seconds| {
                RouteMeasurement::new(seconds)
                    .with_endpoints(from, to)
                    .with_distance_meters(distance_meters)
                    .with_labels(labels)
            }),
            traffic_unaware: no_traffic.map(RouteMeasurement::new),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// the capture time printed on the report's `Time:` line, if any.
    pub fn captured_at(&self, text: &str) -> Option<NaiveDateTime> {
        text.lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix(Self::TIME_PREFIX))
            .and_then(|t| NaiveDateTime::parse_from_str(t.trim(), TIMESTAMP_FORMAT).ok())
    }

    fn coordinate(&self, text: &str) -> Result<Coordinate, ParseError> {
        let invalid = || ParseError::InvalidCoordinate(text.trim().to_string());
        let point = self.point.find(text).ok_or_else(invalid)?.as_str();
        let latitude = capture_f64(&self.latitude, point).ok_or_else(invalid)?;
        let longitude = capture_f64(&self.longitude, point).ok_or_else(invalid)?;
        Ok(Coordinate::new(latitude, longitude))
    }

    fn duration_seconds(&self, text: &str) -> Result<u64, ParseError> {
        self.seconds
            .captures(text)
            .and_then(|groups| groups[1].parse::<u64>().ok())
            .ok_or_else(|| ParseError::InvalidDuration(text.trim().to_string()))
    }

    fn distance_meters(&self, text: &str) -> Result<f64, ParseError> {
        capture_f64(&self.distance, text)
            .map(|km| (km * 1000.0).round())
            .ok_or_else(|| ParseError::InvalidDistance(text.trim().to_string()))
    }
}

/// parses a route report with a freshly built [`ReportParser`].
pub fn parse_report(text: &str) -> RawRound {
    match ReportParser::new() {
        Ok(parser) => parser.parse(text),
        Err(e) => RawRound::failed(vec![e.to_string()]),
    }
}

fn capture_f64(regex: &Regex, text: &str) -> Option<f64> {
    regex
        .captures(text)
        .and_then(|groups| groups[1].parse::<f64>().ok())
}

/// `['DEFAULT_ROUTE', 'FUEL_EFFICIENT']` or `[DEFAULT_ROUTE]`
fn route_labels(text: &str) -> Vec<String> {
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|label| label.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod test {
    use super::{parse_report, ReportParser};
    use crate::legacy::ParseError;
    use chrono::NaiveDate;
    use trafficlog_core::model::{Coordinate, RouteMeasurement};

    const V2_REPORT: &str = "=== Google Maps Routes API Congestion Quantifier (v2) ===
Time: 2025-06-03 17:05:00
From: {'latitude': 25.0477617, 'longitude': 121.5171332}
To:   {'latitude': 25.0338226, 'longitude': 121.5645413}
Distance: 6.42 km
Duration (no traffic): 700s (11.67 minutes)
Duration (with traffic): 900s (15.00 minutes)
Route labels: ['DEFAULT_ROUTE']
Estimated traffic congestion: MODERATE (+28.6% travel time)
";

    #[test]
    fn test_full_report() {
        let raw = parse_report(V2_REPORT);
        let expected_aware = RouteMeasurement::new(900)
            .with_endpoints(
                Some(Coordinate::new(25.0477617, 121.5171332)),
                Some(Coordinate::new(25.0338226, 121.5645413)),
            )
            .with_distance_meters(Some(6420.0))
            .with_labels(vec![String::from("DEFAULT_ROUTE")]);
        assert_eq!(raw.traffic_aware, Some(expected_aware));
        assert_eq!(raw.traffic_unaware, Some(RouteMeasurement::new(700)));
        assert!(raw.errors.is_empty(), "{:?}", raw.errors);
    }

    #[test]
    fn test_captured_at() {
        let parser = ReportParser::new().expect("patterns should build");
        let expected = NaiveDate::from_ymd_opt(2025, 6, 3).and_then(|d| d.and_hms_opt(17, 5, 0));
        assert_eq!(parser.captured_at(V2_REPORT), expected);
        assert_eq!(parser.captured_at("Time: around five"), None);
        assert_eq!(parser.captured_at("Duration (no traffic): 700s"), None);
    }

    #[test]
    fn test_seconds_spelled_out_and_json_points() {
        let text = "From: {\"latitude\": 25.0478, \"longitude\": 121.517}\n\
                    Duration (with traffic): 61 seconds (1.02 minutes)\n\
                    Duration (no traffic): 59 seconds (0.98 minutes)";
        let raw = parse_report(text);
        let aware = raw.traffic_aware.expect("aware measurement");
        assert_eq!(aware.duration_seconds, 61);
        assert_eq!(aware.start_point, Some(Coordinate::new(25.0478, 121.517)));
        assert_eq!(aware.end_point, None);
        assert_eq!(raw.traffic_unaware.map(|m| m.duration_seconds), Some(59));
    }

    #[test]
    fn test_missing_traffic_aware_duration() {
        let text = "From: {'latitude': 25.0478, 'longitude': 121.517}\n\
                    HTTP error: 403 Client Error\n\
                    Duration (no traffic): 700s (11.67 minutes)";
        let raw = parse_report(text);
        assert_eq!(raw.traffic_aware, None);
        assert_eq!(raw.traffic_unaware, Some(RouteMeasurement::new(700)));
        assert_eq!(raw.errors.len(), 1);
        assert!(raw.errors[0].contains("Duration (with traffic):"));
    }

    #[test]
    fn test_unreadable_fields_are_absent() {
        let text = "From: {}\n\
                    Duration (with traffic): unknown\n\
                    Duration (no traffic): 700s";
        let raw = parse_report(text);
        assert_eq!(raw.traffic_aware, None);
        assert!(raw.traffic_unaware.is_some());
        assert!(raw.errors.iter().any(|e| e.contains("coordinate")));
        assert!(raw.errors.iter().any(|e| e.contains("duration")));
    }

    #[test]
    fn test_fractional_seconds_are_invalid() {
        let text = "Duration (with traffic): 1.5s (0.03 minutes)\n\
                    Duration (no traffic): 700s (11.67 minutes)";
        let parser = ReportParser::new().expect("patterns should build");
        let raw = parser.parse(text);
        assert_eq!(raw.traffic_aware, None);
        assert_eq!(raw.traffic_unaware, Some(RouteMeasurement::new(700)));
        assert_eq!(raw.errors.len(), 1);
        assert!(raw.errors[0].contains("unable to read duration from '1.5s"));
        assert!(matches!(
            parser.duration_seconds(" 1.5s"),
            Err(ParseError::InvalidDuration(_))
        ));
        assert_eq!(parser.duration_seconds("900s").ok(), Some(900));
        assert_eq!(parser.duration_seconds(" 61 seconds (1.02 minutes)").ok(), Some(61));
    }

    #[test]
    fn test_unrelated_text_yields_empty_round() {
        let parser = ReportParser::new().expect("patterns should build");
        let raw = parser.parse("U need: export GOOGLE_MAPS_API_KEY\n\nRaw response: {}");
        assert!(raw.is_degraded());
        assert_eq!(raw.traffic_aware, None);
        assert_eq!(raw.traffic_unaware, None);
        assert_eq!(raw.errors.len(), 2);
    }
}
