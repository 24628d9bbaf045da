use chrono::NaiveDateTime;

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("unsupported configuration file type: {0}")]
    UnsupportedFileType(String),
    #[error("invalid schedule window: end time {end} must be after start time {start}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("schedule interval must be greater than zero")]
    ZeroInterval,
    #[error("invalid clock time '{0}', expected HH:MM")]
    InvalidClockTime(String),
    #[error("missing routing API key, set the {0} environment variable")]
    MissingApiKey(&'static str),
    #[error("legacy command must name a program to run")]
    EmptyLegacyCommand,
    #[error("failure preparing legacy report parser: {0}")]
    ReportParserError(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("failure building routing client: {0}")]
    RoutingClientError(String),
}
