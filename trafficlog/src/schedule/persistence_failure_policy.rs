use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// what a schedule does when a sample cannot be written to the log.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceFailurePolicy {
    /// stop the schedule and report the failure. rows written before it are kept.
    #[default]
    Abort,
    /// report the sample on the console only and continue with the next round.
    Skip,
}
