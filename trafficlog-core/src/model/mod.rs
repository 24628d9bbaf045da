mod coordinate;
mod core_error;
mod route_measurement;
mod traffic_mode;

pub use coordinate::Coordinate;
pub use core_error::CoreError;
pub use route_measurement::RouteMeasurement;
pub use traffic_mode::TrafficMode;
