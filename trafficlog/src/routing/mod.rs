mod routing_client;
mod routing_error;

pub mod google;

pub use routing_client::RoutingClient;
pub use routing_error::RoutingError;
