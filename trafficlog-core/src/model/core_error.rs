#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate '{value}', expected 'latitude,longitude': {message}")]
    InvalidCoordinate { value: String, message: String },
    #[error("unknown congestion status '{0}'")]
    InvalidCongestionStatus(String),
}
