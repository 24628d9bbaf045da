//! the Routes API reports durations as protobuf JSON strings such as `"754s"`.
//! older responses (and some proxies) use ISO 8601 durations like `"PT12M34S"`.
use regex::Regex;

use crate::routing::RoutingError;

const SECONDS_REGEX: &str = r"^(\d+)(?:\.\d+)?s$";
const ISO_8601_REGEX: &str = r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.\d+)?S)?$";

/// parses a duration string into whole seconds. fractional seconds are truncated.
///
/// # Arguments
///
/// * `duration` - a duration in `<n>s` or `PT<h>H<m>M<s>S` form
///
/// # Returns
///
/// the duration in seconds, or a decoding error for any other form.
pub fn parse_duration(duration: &str) -> Result<u64, RoutingError> {
    let duration = duration.trim();
    let seconds_re = build_regex(SECONDS_REGEX)?;
    if let Some(groups) = seconds_re.captures(duration) {
        return parse_group(&groups[1], duration);
    }
    let iso_re = build_regex(ISO_8601_REGEX)?;
    match iso_re.captures(duration) {
        Some(groups) if groups.iter().skip(1).any(|g| g.is_some()) => {
            let mut total: u64 = 0;
            for (index, unit_seconds) in [(1, 3600), (2, 60), (3, 1)] {
                if let Some(m) = groups.get(index) {
                    total = parse_group(m.as_str(), duration)?
                        .checked_mul(unit_seconds)
                        .and_then(|seconds| total.checked_add(seconds))
                        .ok_or_else(|| {
                            RoutingError::DecodeError(format!(
                                "duration '{duration}' is out of range"
                            ))
                        })?;
                }
            }
            Ok(total)
        }
        _ => Err(RoutingError::DecodeError(format!(
            "unrecognized duration '{duration}'"
        ))),
    }
}

fn build_regex(pattern: &str) -> Result<Regex, RoutingError> {
    Regex::new(pattern).map_err(|e| {
        RoutingError::OtherError(format!("internal error building duration regex: {e}"))
    })
}

fn parse_group(value: &str, duration: &str) -> Result<u64, RoutingError> {
    value.parse::<u64>().map_err(|e| {
        RoutingError::DecodeError(format!("invalid number in duration '{duration}': {e}"))
    })
}
