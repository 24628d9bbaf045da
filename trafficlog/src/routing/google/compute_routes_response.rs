use serde::Deserialize;
use trafficlog_core::model::{Coordinate, RouteMeasurement};

use super::duration_codec;
use crate::routing::RoutingError;

/// the subset of a `computeRoutes` response selected by
/// [`super::GoogleRoutesClient::FIELD_MASK`].
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<RouteRecord>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct RouteRecord {
    duration: Option<String>,
    distance_meters: Option<f64>,
    #[serde(default)]
    route_labels: Vec<String>,
    #[serde(default)]
    legs: Vec<LegRecord>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct LegRecord {
    start_location: Option<LocationRecord>,
    end_location: Option<LocationRecord>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct LocationRecord {
    lat_lng: Option<LatLngRecord>,
}

// proto3 JSON omits zero-valued fields
#[derive(Deserialize, Debug, Clone)]
struct LatLngRecord {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

impl LocationRecord {
    fn coordinate(&self) -> Option<Coordinate> {
        self.lat_lng
            .as_ref()
            .map(|ll| Coordinate::new(ll.latitude, ll.longitude))
    }
}

impl ComputeRoutesResponse {
    /// decodes a response body.
    pub fn from_json(body: &str) -> Result<ComputeRoutesResponse, RoutingError> {
        serde_json::from_str(body).map_err(|e| {
            RoutingError::DecodeError(format!("invalid computeRoutes response body: {e}"))
        })
    }

    /// converts the first returned route into a measurement. the start and end points
    /// are taken from the first leg of that route.
    pub fn into_measurement(self) -> Result<RouteMeasurement, RoutingError> {
        let route = self.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let duration = route.duration.as_deref().ok_or_else(|| {
            RoutingError::DecodeError(String::from("route is missing a duration"))
        })?;
        let duration_seconds = duration_codec::parse_duration(duration)?;
        let leg = route.legs.first();
        let start = leg
            .and_then(|l| l.start_location.as_ref())
            .and_then(LocationRecord::coordinate);
        let end = leg
            .and_then(|l| l.end_location.as_ref())
            .and_then(LocationRecord::coordinate);
        Ok(RouteMeasurement::new(duration_seconds)
            .with_endpoints(start, end)
            .with_distance_meters(route.distance_meters)
            .with_labels(route.route_labels))
    }
}

#[cfg(test)]
mod test {
    use super::ComputeRoutesResponse;
    use crate::routing::RoutingError;
    use trafficlog_core::model::Coordinate;

    const TAIPEI_RESPONSE: &str = r#"{
      "routes": [
        {
          "legs": [
            {
              "startLocation": { "latLng": { "latitude": 25.048055599999998, "longitude": 121.516261 } },
              "endLocation": { "latLng": { "latitude": 25.0336414, "longitude": 121.5646285 } }
            }
          ],
          "distanceMeters": 6152,
          "duration": "900s",
          "routeLabels": ["DEFAULT_ROUTE"]
        }
      ]
    }"#;

    #[test]
    fn test_decode_first_route() {
        let measurement = ComputeRoutesResponse::from_json(TAIPEI_RESPONSE)
            .and_then(|r| r.into_measurement())
            .expect("should decode");
        assert_eq!(measurement.duration_seconds, 900);
        assert_eq!(measurement.distance_meters, Some(6152.0));
        assert_eq!(measurement.labels, vec![String::from("DEFAULT_ROUTE")]);
        assert_eq!(
            measurement.start_point,
            Some(Coordinate::new(25.048055599999998, 121.516261))
        );
        assert_eq!(
            measurement.end_point,
            Some(Coordinate::new(25.0336414, 121.5646285))
        );
    }

    #[test]
    fn test_decode_minimal_route() {
        let measurement = ComputeRoutesResponse::from_json(r#"{"routes":[{"duration":"PT11M40S"}]}"#)
            .and_then(|r| r.into_measurement())
            .expect("should decode");
        assert_eq!(measurement.duration_seconds, 700);
        assert_eq!(measurement.distance_meters, None);
        assert!(measurement.labels.is_empty());
        assert_eq!(measurement.start_point, None);
    }

    #[test]
    fn test_empty_response_has_no_route() {
        let result = ComputeRoutesResponse::from_json("{}").and_then(|r| r.into_measurement());
        assert!(matches!(result, Err(RoutingError::NoRoute)));
    }

    #[test]
    fn test_missing_duration_is_an_error() {
        let result = ComputeRoutesResponse::from_json(r#"{"routes":[{"distanceMeters":10}]}"#)
            .and_then(|r| r.into_measurement());
        assert!(matches!(result, Err(RoutingError::DecodeError(_))));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let result = ComputeRoutesResponse::from_json("<html>quota exceeded</html>");
        assert!(matches!(result, Err(RoutingError::DecodeError(_))));
    }
}
