#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("internal error building report pattern: {0}")]
    PatternError(#[from] regex::Error),
    #[error("report has no '{0}' line")]
    MissingLine(&'static str),
    #[error("unable to read coordinate from '{0}'")]
    InvalidCoordinate(String),
    #[error("unable to read duration from '{0}'")]
    InvalidDuration(String),
    #[error("unable to read distance from '{0}'")]
    InvalidDistance(String),
}
