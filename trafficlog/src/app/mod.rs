mod app_error;
mod trafficlog_cli;

pub mod run;

pub use app_error::TrafficLogAppError;
pub use trafficlog_cli::{TrafficLogCliArguments, TrafficLogOperation};
