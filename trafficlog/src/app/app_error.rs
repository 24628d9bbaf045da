use crate::{config::ConfigurationError, schedule::ScheduleError, store::LogStoreError};

#[derive(thiserror::Error, Debug)]
pub enum TrafficLogAppError {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    #[error(transparent)]
    LogStoreError(#[from] LogStoreError),
    #[error("failure reading {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure encoding configuration as TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
}
