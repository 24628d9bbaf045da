//! client for the Google Maps Routes API (v2), see
//! [https://developers.google.com/maps/documentation/routes/reference/rest/v2/TopLevel/computeRoutes].
mod compute_routes_request;
mod compute_routes_response;
mod google_routes_client;

pub mod duration_codec;

pub use compute_routes_request::ComputeRoutesRequest;
pub use compute_routes_response::ComputeRoutesResponse;
pub use google_routes_client::GoogleRoutesClient;
