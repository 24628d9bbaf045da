use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::config::ConfigurationError;

/// a sampling window on the local clock. ticks fall on `start + k * interval` for
/// every k where the tick is not after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    interval: TimeDelta,
}

impl ScheduleWindow {
    /// creates a window, failing when `end <= start` or the interval is not positive.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        interval: TimeDelta,
    ) -> Result<ScheduleWindow, ConfigurationError> {
        if end <= start {
            return Err(ConfigurationError::InvalidWindow { start, end });
        }
        if interval <= TimeDelta::zero() {
            return Err(ConfigurationError::ZeroInterval);
        }
        Ok(ScheduleWindow {
            start,
            end,
            interval,
        })
    }

    /// a window between two clock times of the same calendar day.
    pub fn for_day(
        day: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        interval: TimeDelta,
    ) -> Result<ScheduleWindow, ConfigurationError> {
        ScheduleWindow::new(day.and_time(start), day.and_time(end), interval)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// number of ticks in the full window, `floor((end - start) / interval) + 1`.
    pub fn total_rounds(&self) -> u64 {
        let span = (self.end - self.start).num_milliseconds();
        let step = self.interval.num_milliseconds().max(1);
        (span / step) as u64 + 1
    }

    /// the first tick to execute for a schedule started at `now`: the window start
    /// if it is still ahead, otherwise the earliest tick at or after `now`. ticks
    /// missed before `now` are never replayed.
    ///
    /// # Returns
    ///
    /// None when no tick remains in the window.
    pub fn first_tick(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if now > self.end {
            return None;
        }
        if now <= self.start {
            return Some(self.start);
        }
        let elapsed = (now - self.start).num_milliseconds();
        let step = self.interval.num_milliseconds().max(1);
        let ticks_passed = (elapsed + step - 1) / step;
        let tick = self.start + TimeDelta::milliseconds(ticks_passed * step);
        if tick > self.end {
            None
        } else {
            Some(tick)
        }
    }

    /// true while `tick` is within the window.
    pub fn contains(&self, tick: NaiveDateTime) -> bool {
        tick <= self.end
    }
}

impl Display for ScheduleWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let interval_seconds = self.interval.num_seconds();
        write!(
            f,
            "{} to {} / per {} minutes {} seconds",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            interval_seconds / 60,
            interval_seconds % 60
        )
    }
}
