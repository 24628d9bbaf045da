use trafficlog_core::model::{Coordinate, RouteMeasurement, TrafficMode};

use super::RoutingError;

/// a routing service that estimates how long it takes to drive between two points.
///
/// calls are blocking. failures of any kind, including timeouts, are reported as
/// a [`RoutingError`] so that a sampling round can degrade instead of aborting.
pub trait RoutingClient {
    fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TrafficMode,
    ) -> Result<RouteMeasurement, RoutingError>;
}

impl<T: RoutingClient + ?Sized> RoutingClient for Box<T> {
    fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TrafficMode,
    ) -> Result<RouteMeasurement, RoutingError> {
        (**self).compute_route(origin, destination, mode)
    }
}
