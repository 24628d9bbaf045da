use super::{
    Clock, PersistenceFailurePolicy, RoundReport, ScheduleError, ScheduleEvent, ScheduleMode,
    ScheduleSummary, SchedulerState,
};
use crate::{sampler::SampleSource, store::SampleSink};

/// drives repeated sampling rounds on a schedule.
///
/// rounds run strictly one after another: each tick samples the route, appends
/// the sample to the sink and reports it before the next wait begins. the tick
/// advances by exactly one interval per round, so a slow round never pushes later
/// ticks back; if a round overruns, the next one starts without waiting.
pub struct WindowScheduler<'a> {
    mode: ScheduleMode,
    policy: PersistenceFailurePolicy,
    clock: &'a dyn Clock,
    state: SchedulerState,
}

impl<'a> WindowScheduler<'a> {
    pub fn new(
        mode: ScheduleMode,
        policy: PersistenceFailurePolicy,
        clock: &'a dyn Clock,
    ) -> WindowScheduler<'a> {
        WindowScheduler {
            mode,
            policy,
            clock,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    fn transition(&mut self, next: SchedulerState) {
        log::info!("scheduler {} -> {}", self.state, next);
        self.state = next;
    }

    /// runs the schedule to completion.
    ///
    /// # Arguments
    /// * `source` - produces one sample per tick
    /// * `sink` - receives every sample, in tick order
    /// * `on_event` - called with the plan before the first round and after every round
    ///
    /// # Result
    /// totals for the schedule, or the persistence failure that stopped it when the
    /// policy is [`PersistenceFailurePolicy::Abort`].
    pub fn run<F>(
        &mut self,
        source: &mut dyn SampleSource,
        sink: &mut dyn SampleSink,
        mut on_event: F,
    ) -> Result<ScheduleSummary, ScheduleError>
    where
        F: FnMut(ScheduleEvent<'_>),
    {
        let total_rounds = self.mode.total_rounds();
        let now = self.clock.now();
        let first_tick = self.mode.first_tick(now);
        log::info!(
            "schedule '{}' planned with {} rounds, first tick {:?}",
            self.mode,
            total_rounds,
            first_tick
        );
        on_event(ScheduleEvent::Planned {
            mode: &self.mode,
            total_rounds,
            first_tick,
        });

        let mut summary = ScheduleSummary {
            total_rounds,
            ..Default::default()
        };
        let mut next_tick = match first_tick {
            Some(tick) => tick,
            None => {
                log::info!("no rounds left to run at {now}");
                self.transition(SchedulerState::Done);
                return Ok(summary);
            }
        };

        self.transition(SchedulerState::WaitingForStart);
        if now < next_tick {
            log::info!("waiting until {next_tick}");
            self.clock.sleep_until(next_tick);
        }

        self.transition(SchedulerState::Running);
        let interval = self.mode.interval();
        while self.mode.has_tick(next_tick, summary.rounds_executed) {
            self.clock.sleep_until(next_tick);
            let round = summary.rounds_executed + 1;
            let sample = source.sample(self.clock.now());
            summary.rounds_executed = round;
            if sample.duration_with_traffic_minutes().is_none()
                || sample.duration_no_traffic_minutes().is_none()
            {
                summary.degraded_rounds += 1;
            }

            let persisted = match sink.append(&sample) {
                Ok(()) => {
                    summary.rounds_persisted += 1;
                    true
                }
                Err(e) => match self.policy {
                    PersistenceFailurePolicy::Abort => {
                        on_event(ScheduleEvent::RoundCompleted(RoundReport {
                            round,
                            total_rounds,
                            tick: next_tick,
                            sample: &sample,
                            persisted: false,
                            mode: &self.mode,
                        }));
                        self.transition(SchedulerState::Done);
                        return Err(ScheduleError::PersistenceError { round, source: e });
                    }
                    PersistenceFailurePolicy::Skip => {
                        log::warn!("round {round} not persisted, continuing: {e}");
                        false
                    }
                },
            };
            on_event(ScheduleEvent::RoundCompleted(RoundReport {
                round,
                total_rounds,
                tick: next_tick,
                sample: &sample,
                persisted,
                mode: &self.mode,
            }));
            next_tick += interval;
        }

        self.transition(SchedulerState::Done);
        log::info!(
            "schedule finished: {} of {} rounds executed, {} persisted, {} degraded",
            summary.rounds_executed,
            summary.total_rounds,
            summary.rounds_persisted,
            summary.degraded_rounds
        );
        Ok(summary)
    }
}
