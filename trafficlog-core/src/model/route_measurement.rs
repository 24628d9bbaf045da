use serde::{Deserialize, Serialize};

use super::Coordinate;

/// the result of a single routing query between two points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteMeasurement {
    /// estimated travel time of the route
    pub duration_seconds: u64,
    /// route length, if reported by the routing service
    pub distance_meters: Option<f64>,
    /// labels attached to the route by the routing service, in reported order
    pub labels: Vec<String>,
    /// snapped start of the first route leg
    pub start_point: Option<Coordinate>,
    /// snapped end of the first route leg
    pub end_point: Option<Coordinate>,
}

impl RouteMeasurement {
    /// a measurement carrying only a duration.
    pub fn new(duration_seconds: u64) -> RouteMeasurement {
        RouteMeasurement {
            duration_seconds,
            distance_meters: None,
            labels: vec![],
            start_point: None,
            end_point: None,
        }
    }

    pub fn with_endpoints(mut self, start: Option<Coordinate>, end: Option<Coordinate>) -> Self {
        self.start_point = start;
        self.end_point = end;
        self
    }

    pub fn with_distance_meters(mut self, distance_meters: Option<f64>) -> Self {
        self.distance_meters = distance_meters;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_meters.map(|m| m / 1000.0)
    }
}
