use std::fmt::Display;

use chrono::{NaiveDateTime, TimeDelta};

use super::ScheduleWindow;
use crate::config::ConfigurationError;

/// when rounds run. both modes share the same per-round behavior and only differ in
/// where the first tick falls and when the schedule ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// a fixed number of rounds, the first one immediately
    FixedCount { rounds: u64, interval: TimeDelta },
    /// every tick of a start/end window
    Window(ScheduleWindow),
}

impl ScheduleMode {
    pub fn fixed_count(rounds: u64, interval: TimeDelta) -> Result<ScheduleMode, ConfigurationError> {
        if interval <= TimeDelta::zero() {
            return Err(ConfigurationError::ZeroInterval);
        }
        Ok(ScheduleMode::FixedCount { rounds, interval })
    }

    pub fn interval(&self) -> TimeDelta {
        match self {
            ScheduleMode::FixedCount { interval, .. } => *interval,
            ScheduleMode::Window(window) => window.interval(),
        }
    }

    /// planned number of rounds, reported before the schedule runs.
    pub fn total_rounds(&self) -> u64 {
        match self {
            ScheduleMode::FixedCount { rounds, .. } => *rounds,
            ScheduleMode::Window(window) => window.total_rounds(),
        }
    }

    /// the first tick for a schedule started at `now`, or None if nothing is left to run.
    pub fn first_tick(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            ScheduleMode::FixedCount { rounds: 0, .. } => None,
            ScheduleMode::FixedCount { .. } => Some(now),
            ScheduleMode::Window(window) => window.first_tick(now),
        }
    }

    /// true if `tick` should run given the number of rounds already executed.
    pub fn has_tick(&self, tick: NaiveDateTime, rounds_executed: u64) -> bool {
        match self {
            ScheduleMode::FixedCount { rounds, .. } => rounds_executed < *rounds,
            ScheduleMode::Window(window) => window.contains(tick),
        }
    }
}

impl Display for ScheduleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleMode::FixedCount { rounds, interval } => {
                let seconds = interval.num_seconds();
                write!(
                    f,
                    "{rounds} rounds / per {} minutes {} seconds",
                    seconds / 60,
                    seconds % 60
                )
            }
            ScheduleMode::Window(window) => write!(f, "{window}"),
        }
    }
}
