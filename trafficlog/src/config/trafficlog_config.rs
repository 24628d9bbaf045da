use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use trafficlog_core::model::Coordinate;

use super::ConfigurationError;
use crate::schedule::PersistenceFailurePolicy;

/// run configuration of a sampling session. resolved once at startup and passed
/// by value into the components that need it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TrafficLogConfig {
    /// when set, samples are produced by running this command and reading its
    /// printed route report instead of calling the routing service directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_command: Option<Vec<String>>,
    pub route: RouteConfig,
    pub routing: RoutingConfig,
    pub log: LogConfig,
}

/// the route being sampled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl Default for RouteConfig {
    /// Taipei Main Station to Taipei 101
    fn default() -> Self {
        Self {
            origin: Coordinate::new(25.0478, 121.5170),
            destination: Coordinate::new(25.0336, 121.5646),
        }
    }
}

/// connection settings for the routing service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    pub endpoint: String,
    pub language_code: String,
    pub units: String,
    pub timeout_seconds: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("https://routes.googleapis.com/directions/v2:computeRoutes"),
            language_code: String::from("zh-TW"),
            units: String::from("METRIC"),
            timeout_seconds: 30,
        }
    }
}

/// where and how samples are persisted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// sample log path. when missing, a timestamped file in the working directory is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub on_persistence_failure: PersistenceFailurePolicy,
}

impl LogConfig {
    /// the configured log path, or `route_log_<yyyy-mm-dd_HH-MM-SS>.csv` named
    /// after the given session start time.
    pub fn file_or_default(&self, session_start: &NaiveDateTime) -> PathBuf {
        match &self.file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(format!(
                "route_log_{}.csv",
                session_start.format("%Y-%m-%d_%H-%M-%S")
            )),
        }
    }
}

impl TrafficLogConfig {
    /// prefix of environment variables that override configuration values, for
    /// example `TRAFFICLOG_ROUTING__TIMEOUT_SECONDS=10`.
    pub const ENV_PREFIX: &str = "TRAFFICLOG";

    /// loads the configuration, layering an optional TOML or JSON file and then the
    /// environment over the defaults.
    pub fn load(filepath: Option<&str>) -> Result<TrafficLogConfig, ConfigurationError> {
        Self::load_with_environment(filepath, Self::environment())
    }

    /// the environment source, `TRAFFICLOG_<SECTION>__<KEY>`.
    fn environment() -> Environment {
        Environment::with_prefix(Self::ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_environment(
        filepath: Option<&str>,
        environment: Environment,
    ) -> Result<TrafficLogConfig, ConfigurationError> {
        let mut builder = Config::builder();
        if let Some(f) = filepath {
            log::info!("reading trafficlog configuration from {f}");
            builder = builder.add_source(File::new(f, file_format(f)?));
        }
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| ConfigurationError::ConfigReadError {
                msg: String::from("failed reading configuration"),
                source: e,
            })?;
        config
            .try_deserialize::<TrafficLogConfig>()
            .map_err(|e| ConfigurationError::ConfigReadError {
                msg: String::from("failed decoding configuration"),
                source: e,
            })
    }
}

fn file_format(filepath: &str) -> Result<FileFormat, ConfigurationError> {
    let extension = Path::new(filepath)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(ConfigurationError::UnsupportedFileType(filepath.to_string())),
    }
}
