use chrono::Local;
use trafficlog_core::sample::assemble;

use super::TrafficLogAppError;
use crate::{
    config::{ConfigurationError, TrafficLogConfig},
    legacy::{ReportParser, RouteReport},
    routing::google::GoogleRoutesClient,
    sampler::{CommandSampleSource, RouteSampler, SampleSource},
    schedule::{
        Clock, ScheduleEvent, ScheduleMode, ScheduleSummary, SystemClock, WindowScheduler,
    },
    store::{CsvLogStore, SampleSink},
};

/// builds the sample source named by the configuration: the legacy command when one
/// is configured, otherwise the Routes API client.
pub fn build_sample_source(
    config: &TrafficLogConfig,
) -> Result<Box<dyn SampleSource>, ConfigurationError> {
    match &config.legacy_command {
        Some(command) => {
            log::info!("sampling with legacy command {command:?}");
            Ok(Box::new(CommandSampleSource::new(command)?))
        }
        None => {
            let client = GoogleRoutesClient::from_env(&config.routing)?;
            log::info!(
                "sampling route {} -> {} with the Routes API",
                config.route.origin,
                config.route.destination
            );
            Ok(Box::new(RouteSampler::new(client, &config.route)))
        }
    }
}

/// runs a schedule against the system clock, appending every sample to the
/// configured log and printing a summary line per round.
pub fn run_schedule(
    config: &TrafficLogConfig,
    mode: ScheduleMode,
) -> Result<ScheduleSummary, TrafficLogAppError> {
    let clock = SystemClock;
    let mut source = build_sample_source(config)?;
    let mut store = CsvLogStore::new(config.log.file_or_default(&clock.now()));
    log::info!("logging samples to {}", store.path().display());
    let mut scheduler = WindowScheduler::new(mode, config.log.on_persistence_failure, &clock);
    let summary = scheduler.run(source.as_mut(), &mut store, print_event)?;
    Ok(summary)
}

/// samples the route once and prints the route report.
pub fn run_probe(config: &TrafficLogConfig) -> Result<(), TrafficLogAppError> {
    let mut source = build_sample_source(config)?;
    let captured_at = Local::now().naive_local();
    let raw = source.collect_round();
    let sample = assemble(&raw, captured_at);
    println!("{}", RouteReport::new(&raw, &sample));
    Ok(())
}

/// reads a saved route report and appends its sample to the log. the report's own
/// `Time:` line is used as the capture time when present.
pub fn run_parse(config: &TrafficLogConfig, input: &str) -> Result<(), TrafficLogAppError> {
    let text = std::fs::read_to_string(input).map_err(|e| TrafficLogAppError::ReadError {
        path: input.to_string(),
        source: e,
    })?;
    let parser = ReportParser::new()
        .map_err(|e| ConfigurationError::ReportParserError(e.to_string()))?;
    let now = Local::now().naive_local();
    let captured_at = parser.captured_at(&text).unwrap_or(now);
    let raw = parser.parse(&text);
    for error in raw.errors.iter() {
        log::warn!("{input}: {error}");
    }
    let sample = assemble(&raw, captured_at);
    let mut store = CsvLogStore::new(config.log.file_or_default(&now));
    store.append(&sample)?;
    println!("Logged at {}: {}", store.path().display(), sample);
    Ok(())
}

pub fn show_config(config: &TrafficLogConfig) -> Result<(), TrafficLogAppError> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn print_event(event: ScheduleEvent<'_>) {
    match event {
        ScheduleEvent::Planned {
            mode,
            total_rounds,
            first_tick,
        } => {
            match mode {
                ScheduleMode::Window(window) => {
                    println!("{total_rounds} rounds in {window}");
                    if first_tick.is_none() {
                        println!("Current time is past the scheduled window. Exiting.");
                    }
                }
                ScheduleMode::FixedCount { .. } => println!("{mode}"),
            }
        }
        ScheduleEvent::RoundCompleted(report) => println!("{report}"),
    }
}
