#[derive(thiserror::Error, Debug)]
pub enum LogStoreError {
    #[error("failure opening sample log {path}: {source}")]
    OpenError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure writing sample to {path}: {source}")]
    WriteError { path: String, source: csv::Error },
    #[error("failure flushing sample log {path}: {source}")]
    FlushError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure reading sample log {path}: {source}")]
    ReadError { path: String, source: csv::Error },
}
