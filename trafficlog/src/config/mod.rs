mod configuration_error;
mod trafficlog_config;

pub use configuration_error::ConfigurationError;
pub use trafficlog_config::{LogConfig, RouteConfig, RoutingConfig, TrafficLogConfig};
