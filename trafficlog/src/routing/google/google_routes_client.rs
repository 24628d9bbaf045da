use std::time::Duration;

use trafficlog_core::model::{Coordinate, RouteMeasurement, TrafficMode};

use super::{ComputeRoutesRequest, ComputeRoutesResponse};
use crate::{
    config::{ConfigurationError, RoutingConfig},
    routing::{RoutingClient, RoutingError},
};

/// blocking client for the Routes API `computeRoutes` method.
pub struct GoogleRoutesClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    language_code: String,
    units: String,
}

impl GoogleRoutesClient {
    /// environment variable holding the Routes API key.
    pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

    /// value shipped in example setups in place of a real key.
    pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

    /// response fields requested from the Routes API.
    pub const FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.routeLabels,routes.legs.startLocation,routes.legs.endLocation";

    pub fn new(config: &RoutingConfig, api_key: String) -> Result<Self, ConfigurationError> {
        if api_key.trim().is_empty() || api_key == Self::PLACEHOLDER_API_KEY {
            return Err(ConfigurationError::MissingApiKey(Self::API_KEY_ENV_VAR));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                ConfigurationError::RoutingClientError(format!(
                    "failure building HTTP client: {e}"
                ))
            })?;
        Ok(GoogleRoutesClient {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            language_code: config.language_code.clone(),
            units: config.units.clone(),
        })
    }

    /// builds a client using the API key found in [`Self::API_KEY_ENV_VAR`].
    pub fn from_env(config: &RoutingConfig) -> Result<Self, ConfigurationError> {
        let api_key = std::env::var(Self::API_KEY_ENV_VAR)
            .map_err(|_| ConfigurationError::MissingApiKey(Self::API_KEY_ENV_VAR))?;
        Self::new(config, api_key)
    }
}

impl RoutingClient for GoogleRoutesClient {
    fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TrafficMode,
    ) -> Result<RouteMeasurement, RoutingError> {
        let request = ComputeRoutesRequest::new(
            origin,
            destination,
            mode,
            &self.language_code,
            &self.units,
        );
        log::debug!(
            "computeRoutes {mode} from {origin} to {destination} via {}",
            self.endpoint
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", Self::FIELD_MASK)
            .json(&request)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(RoutingError::StatusError {
                status: status.as_u16(),
                body,
            });
        }
        ComputeRoutesResponse::from_json(&body)?.into_measurement()
    }
}
