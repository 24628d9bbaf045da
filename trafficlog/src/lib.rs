pub mod app;
pub mod config;
pub mod legacy;
pub mod routing;
pub mod sampler;
pub mod schedule;
pub mod store;
