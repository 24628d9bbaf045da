use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// whether a routing query should account for live traffic conditions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficMode {
    /// travel time under current traffic conditions
    TrafficAware,
    /// congestion-free baseline travel time
    TrafficUnaware,
}

impl TrafficMode {
    /// the routing preference name used by routing services for this mode.
    pub fn routing_preference(&self) -> &'static str {
        match self {
            TrafficMode::TrafficAware => "TRAFFIC_AWARE",
            TrafficMode::TrafficUnaware => "TRAFFIC_UNAWARE",
        }
    }
}

impl Display for TrafficMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.routing_preference())
    }
}
