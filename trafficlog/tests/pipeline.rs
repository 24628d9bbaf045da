use std::{cell::RefCell, collections::VecDeque};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use trafficlog::{
    config::RouteConfig,
    routing::{RoutingClient, RoutingError},
    sampler::RouteSampler,
    schedule::{
        ManualClock, PersistenceFailurePolicy, ScheduleEvent, ScheduleMode, ScheduleWindow,
        WindowScheduler,
    },
    store::CsvLogStore,
};
use trafficlog_core::{
    congestion::CongestionStatus,
    model::{Coordinate, RouteMeasurement, TrafficMode},
};

/// replays scripted durations in call order. `None` entries fail the call.
struct ScriptedClient {
    script: RefCell<VecDeque<Option<u64>>>,
}

impl ScriptedClient {
    fn new(script: Vec<Option<u64>>) -> ScriptedClient {
        ScriptedClient {
            script: RefCell::new(script.into()),
        }
    }
}

impl RoutingClient for ScriptedClient {
    fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        _mode: TrafficMode,
    ) -> Result<RouteMeasurement, RoutingError> {
        match self.script.borrow_mut().pop_front() {
            Some(Some(seconds)) => Ok(RouteMeasurement::new(seconds)
                .with_endpoints(Some(*origin), Some(*destination))),
            Some(None) => Err(RoutingError::StatusError {
                status: 403,
                body: String::from("PERMISSION_DENIED"),
            }),
            None => Err(RoutingError::OtherError(String::from("script exhausted"))),
        }
    }
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 3)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test time")
}

#[test]
fn test_late_window_with_degraded_round() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("route_log.csv");
    let clock = ManualClock::new(at(17, 7));
    let client = ScriptedClient::new(vec![
        Some(900),
        Some(700),
        None,
        Some(700),
        Some(1200),
        Some(700),
    ]);
    let mut sampler = RouteSampler::new(client, &RouteConfig::default());
    let mut store = CsvLogStore::new(&path);
    let window = ScheduleWindow::new(at(17, 0), at(17, 20), TimeDelta::minutes(5))
        .expect("valid window");
    let mut scheduler = WindowScheduler::new(
        ScheduleMode::Window(window),
        PersistenceFailurePolicy::Abort,
        &clock,
    );

    let mut lines = vec![];
    let summary = scheduler
        .run(&mut sampler, &mut store, |event| {
            if let ScheduleEvent::RoundCompleted(report) = event {
                lines.push(report.to_string());
            }
        })
        .expect("schedule should complete");

    assert_eq!(summary.total_rounds, 5);
    assert_eq!(summary.rounds_executed, 3);
    assert_eq!(summary.rounds_persisted, 3);
    assert_eq!(summary.degraded_rounds, 1);
    assert!(lines[0].starts_with("Round 1: Logged at 2025-06-03 17:10:00 (17:00 to 17:20 / per 5 minutes 0 seconds)"));

    let rows = store.read_all().expect("should read log");
    assert_eq!(rows.len(), 3);
    let timestamps: Vec<NaiveDateTime> = rows.iter().map(|s| s.timestamp()).collect();
    assert_eq!(timestamps, vec![at(17, 10), at(17, 15), at(17, 20)]);

    assert_eq!(rows[0].difference_seconds(), Some(200));
    assert_eq!(rows[0].difference_percent(), Some(28.57));
    assert_eq!(rows[0].congestion_status(), Some(CongestionStatus::Moderate));

    assert_eq!(rows[1].start_point(), None);
    assert_eq!(rows[1].duration_with_traffic_minutes(), None);
    assert_eq!(rows[1].duration_no_traffic_minutes(), Some(11.67));
    assert_eq!(rows[1].congestion_status(), None);
    assert_eq!(rows[1].difference_seconds(), None);
    assert_eq!(rows[1].difference_percent(), None);

    assert_eq!(rows[2].difference_percent(), Some(71.43));
    assert_eq!(rows[2].congestion_status(), Some(CongestionStatus::Severe));

    let text = std::fs::read_to_string(&path).expect("should read log");
    assert_eq!(text.lines().filter(|l| l.starts_with("timestamp,")).count(), 1);
}

#[test]
fn test_unwritable_log_aborts_before_next_round() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_such_dir").join("route_log.csv");
    let clock = ManualClock::new(at(9, 0));
    let client = ScriptedClient::new(vec![Some(900), Some(700), Some(900), Some(700)]);
    let mut sampler = RouteSampler::new(client, &RouteConfig::default());
    let mut store = CsvLogStore::new(&path);
    let mode = ScheduleMode::fixed_count(2, TimeDelta::minutes(1)).expect("valid mode");
    let mut scheduler = WindowScheduler::new(mode, PersistenceFailurePolicy::Abort, &clock);

    let mut reported = 0;
    let result = scheduler.run(&mut sampler, &mut store, |event| {
        if let ScheduleEvent::RoundCompleted(report) = event {
            assert!(!report.persisted);
            reported += 1;
        }
    });
    assert!(result.is_err());
    assert_eq!(reported, 1);
    assert!(!path.exists());
}
