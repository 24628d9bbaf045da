use std::fmt::Display;

use chrono::NaiveDateTime;
use trafficlog_core::sample::Sample;

use super::ScheduleMode;

/// progress notifications emitted while a schedule runs.
#[derive(Debug)]
pub enum ScheduleEvent<'a> {
    /// the schedule was planned. emitted once, before any round executes.
    Planned {
        mode: &'a ScheduleMode,
        total_rounds: u64,
        first_tick: Option<NaiveDateTime>,
    },
    /// a round finished, whether or not its sample was persisted.
    RoundCompleted(RoundReport<'a>),
}

/// the outcome of one round. `round` is 1-based and is reporting metadata only,
/// it is not stored with the sample.
#[derive(Debug)]
pub struct RoundReport<'a> {
    pub round: u64,
    pub total_rounds: u64,
    pub tick: NaiveDateTime,
    pub sample: &'a Sample,
    pub persisted: bool,
    pub mode: &'a ScheduleMode,
}

impl Display for RoundReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let logged = if self.persisted {
            "Logged"
        } else {
            "Not logged"
        };
        write!(
            f,
            "Round {}: {} at {} ({}): {}",
            self.round,
            logged,
            self.sample.timestamp().format("%Y-%m-%d %H:%M:%S"),
            self.mode,
            self.sample
        )
    }
}

/// totals of a completed schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total_rounds: u64,
    pub rounds_executed: u64,
    pub rounds_persisted: u64,
    pub degraded_rounds: u64,
}
