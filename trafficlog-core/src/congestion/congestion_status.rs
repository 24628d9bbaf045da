use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::CoreError;

/// congestion classification derived from the percentage increase of the
/// traffic-aware duration over the traffic-unaware baseline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CongestionStatus {
    Smooth,
    Moderate,
    Slow,
    Severe,
}

impl CongestionStatus {
    /// lower bound (inclusive) of the MODERATE band, in percent.
    pub const MODERATE_THRESHOLD_PERCENT: f64 = 10.0;
    /// lower bound (inclusive) of the SLOW band, in percent.
    pub const SLOW_THRESHOLD_PERCENT: f64 = 30.0;
    /// lower bound (inclusive) of the SEVERE band, in percent.
    pub const SEVERE_THRESHOLD_PERCENT: f64 = 60.0;

    /// classifies a percentage increase in travel time. bands are tested in
    /// ascending order with inclusive lower bounds, so exactly 10% is MODERATE.
    pub fn from_percent(percent: f64) -> CongestionStatus {
        if percent < Self::MODERATE_THRESHOLD_PERCENT {
            CongestionStatus::Smooth
        } else if percent < Self::SLOW_THRESHOLD_PERCENT {
            CongestionStatus::Moderate
        } else if percent < Self::SEVERE_THRESHOLD_PERCENT {
            CongestionStatus::Slow
        } else {
            CongestionStatus::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionStatus::Smooth => "SMOOTH",
            CongestionStatus::Moderate => "MODERATE",
            CongestionStatus::Slow => "SLOW",
            CongestionStatus::Severe => "SEVERE",
        }
    }
}

impl Display for CongestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CongestionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMOOTH" => Ok(CongestionStatus::Smooth),
            "MODERATE" => Ok(CongestionStatus::Moderate),
            "SLOW" => Ok(CongestionStatus::Slow),
            "SEVERE" => Ok(CongestionStatus::Severe),
            _ => Err(CoreError::InvalidCongestionStatus(s.to_string())),
        }
    }
}
