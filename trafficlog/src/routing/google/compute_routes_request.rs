use serde::Serialize;
use trafficlog_core::model::{Coordinate, TrafficMode};

/// request body of a `directions/v2:computeRoutes` call for a single driving route.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    origin: Waypoint,
    destination: Waypoint,
    travel_mode: &'static str,
    routing_preference: &'static str,
    compute_alternative_routes: bool,
    route_modifiers: RouteModifiers,
    language_code: String,
    units: String,
}

#[derive(Serialize, Debug, Clone)]
struct Waypoint {
    location: Location,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Location {
    lat_lng: LatLng,
}

#[derive(Serialize, Debug, Clone)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
struct RouteModifiers {
    avoid_tolls: bool,
    avoid_highways: bool,
    avoid_ferries: bool,
}

impl From<&Coordinate> for Waypoint {
    fn from(value: &Coordinate) -> Self {
        Waypoint {
            location: Location {
                lat_lng: LatLng {
                    latitude: value.latitude,
                    longitude: value.longitude,
                },
            },
        }
    }
}

impl ComputeRoutesRequest {
    pub fn new(
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TrafficMode,
        language_code: &str,
        units: &str,
    ) -> ComputeRoutesRequest {
        ComputeRoutesRequest {
            origin: origin.into(),
            destination: destination.into(),
            travel_mode: "DRIVE",
            routing_preference: mode.routing_preference(),
            compute_alternative_routes: false,
            route_modifiers: RouteModifiers::default(),
            language_code: language_code.to_string(),
            units: units.to_string(),
        }
    }
}
