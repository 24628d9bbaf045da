#[derive(thiserror::Error, Debug)]
pub enum RoutingError {
    #[error("routing request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("routing service responded with status {status}: {body}")]
    StatusError { status: u16, body: String },
    #[error("failure decoding routing response: {0}")]
    DecodeError(String),
    #[error("routing service returned no routes")]
    NoRoute,
    #[error("{0}")]
    OtherError(String),
}
