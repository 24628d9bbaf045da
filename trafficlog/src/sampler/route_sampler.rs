use trafficlog_core::{
    model::{Coordinate, RouteMeasurement, TrafficMode},
    sample::RawRound,
};

use super::SampleSource;
use crate::{config::RouteConfig, routing::RoutingClient};

/// samples one route through a [`RoutingClient`], asking for the traffic-aware
/// estimate first and the traffic-unaware baseline second.
pub struct RouteSampler<C: RoutingClient> {
    client: C,
    origin: Coordinate,
    destination: Coordinate,
}

impl<C: RoutingClient> RouteSampler<C> {
    pub fn new(client: C, route: &RouteConfig) -> RouteSampler<C> {
        RouteSampler {
            client,
            origin: route.origin,
            destination: route.destination,
        }
    }

    fn measure(&self, mode: TrafficMode, errors: &mut Vec<String>) -> Option<RouteMeasurement> {
        match self
            .client
            .compute_route(&self.origin, &self.destination, mode)
        {
            Ok(measurement) => Some(measurement),
            Err(e) => {
                errors.push(format!("{mode} route request failed: {e}"));
                None
            }
        }
    }
}

impl<C: RoutingClient> SampleSource for RouteSampler<C> {
    fn collect_round(&mut self) -> RawRound {
        let mut errors = vec![];
        // no retries within a round, a failed call leaves its measurement absent
        let traffic_aware = self.measure(TrafficMode::TrafficAware, &mut errors);
        let traffic_unaware = self.measure(TrafficMode::TrafficUnaware, &mut errors);
        RawRound {
            traffic_aware,
            traffic_unaware,
            errors,
        }
    }
}
