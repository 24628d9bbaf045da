use std::str::FromStr;

use chrono::{Local, NaiveTime, TimeDelta};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use trafficlog_core::model::Coordinate;

use super::TrafficLogAppError;
use crate::{
    config::{ConfigurationError, TrafficLogConfig},
    schedule::{PersistenceFailurePolicy, ScheduleMode, ScheduleWindow},
};

/// command line tool sampling route congestion on a schedule
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrafficLogCliArguments {
    /// TOML or JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// route origin as LAT,LNG
    #[arg(long, global = true)]
    pub origin: Option<String>,
    /// route destination as LAT,LNG
    #[arg(long, global = true)]
    pub destination: Option<String>,
    /// sample log path. defaults to a timestamped file in the working directory.
    #[arg(long, global = true)]
    pub log_file: Option<String>,
    /// command printing a route report, run each round in place of the routing service.
    /// split on whitespace into program and arguments; quoting is not interpreted, so
    /// paths or arguments containing spaces must be given as the `legacy_command` list
    /// of the configuration file instead.
    #[arg(long, global = true)]
    pub legacy_command: Option<String>,
    /// what to do when a sample cannot be written to the log
    #[arg(long, global = true, value_enum)]
    pub on_persistence_failure: Option<PersistenceFailurePolicy>,
    /// select the trafficlog operation to run
    #[command(subcommand)]
    pub op: TrafficLogOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TrafficLogOperation {
    /// samples the route once and prints the route report. nothing is logged.
    Probe,
    /// samples a fixed number of rounds, the first one immediately.
    Run {
        /// number of rounds
        #[arg(short, long, default_value_t = 25)]
        rounds: u64,
        #[arg(long, default_value_t = 5)]
        interval_minutes: u32,
        #[arg(long, default_value_t = 0)]
        interval_seconds: u32,
    },
    /// samples every interval between two clock times of today.
    Window {
        /// window start, HH:MM
        #[arg(long)]
        start: String,
        /// window end, HH:MM. must be after the start.
        #[arg(long)]
        end: String,
        #[arg(long)]
        interval_minutes: u32,
        #[arg(long, default_value_t = 0)]
        interval_seconds: u32,
    },
    /// reads a saved route report and appends its sample to the log.
    Parse {
        /// file containing the printed route report
        #[arg(short, long)]
        input: String,
    },
    /// prints the resolved configuration as TOML.
    ShowConfig,
}

impl TrafficLogCliArguments {
    pub fn run(&self) -> Result<(), TrafficLogAppError> {
        let config = self.resolve_config()?;
        self.op.run(&config)
    }

    /// loads the configuration and applies the command line overrides on top.
    pub fn resolve_config(&self) -> Result<TrafficLogConfig, ConfigurationError> {
        let mut config = TrafficLogConfig::load(self.config.as_deref())?;
        if let Some(origin) = &self.origin {
            config.route.origin = parse_coordinate(origin)?;
        }
        if let Some(destination) = &self.destination {
            config.route.destination = parse_coordinate(destination)?;
        }
        if let Some(log_file) = &self.log_file {
            config.log.file = Some(log_file.clone());
        }
        if let Some(command) = &self.legacy_command {
            config.legacy_command = Some(command.split_whitespace().map(String::from).collect());
        }
        if let Some(policy) = self.on_persistence_failure {
            config.log.on_persistence_failure = policy;
        }
        Ok(config)
    }
}

impl TrafficLogOperation {
    pub fn run(&self, config: &TrafficLogConfig) -> Result<(), TrafficLogAppError> {
        match self {
            TrafficLogOperation::Probe => crate::app::run::run_probe(config),
            TrafficLogOperation::Run {
                rounds,
                interval_minutes,
                interval_seconds,
            } => {
                let interval = interval_delta(*interval_minutes, *interval_seconds);
                let mode = ScheduleMode::fixed_count(*rounds, interval)?;
                crate::app::run::run_schedule(config, mode).map(|_| ())
            }
            TrafficLogOperation::Window {
                start,
                end,
                interval_minutes,
                interval_seconds,
            } => {
                let today = Local::now().date_naive();
                let window = ScheduleWindow::for_day(
                    today,
                    parse_clock_time(start)?,
                    parse_clock_time(end)?,
                    interval_delta(*interval_minutes, *interval_seconds),
                )?;
                crate::app::run::run_schedule(config, ScheduleMode::Window(window)).map(|_| ())
            }
            TrafficLogOperation::Parse { input } => crate::app::run::run_parse(config, input),
            TrafficLogOperation::ShowConfig => crate::app::run::show_config(config),
        }
    }
}

pub fn interval_delta(minutes: u32, seconds: u32) -> TimeDelta {
    TimeDelta::minutes(minutes as i64) + TimeDelta::seconds(seconds as i64)
}

/// reads a `HH:MM` clock time.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, ConfigurationError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ConfigurationError::InvalidClockTime(s.to_string()))
}

fn parse_coordinate(s: &str) -> Result<Coordinate, ConfigurationError> {
    Coordinate::from_str(s).map_err(|e| ConfigurationError::InvalidCoordinate(e.to_string()))
}
