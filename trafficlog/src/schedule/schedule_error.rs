use crate::store::LogStoreError;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("failure persisting round {round}, remaining rounds aborted: {source}")]
    PersistenceError { round: u64, source: LogStoreError },
}
