use std::cell::Cell;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// source of local wall-clock time for schedules. sleeping is the only point at
/// which a schedule suspends.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// blocks until `instant`. returns immediately if it has already passed.
    fn sleep_until(&self, instant: NaiveDateTime);
}

/// the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep_until(&self, instant: NaiveDateTime) {
        // to_std fails for negative durations, i.e. instants in the past
        if let Ok(remaining) = (instant - self.now()).to_std() {
            std::thread::sleep(remaining);
        }
    }
}

/// a clock that only moves when slept on or advanced, used to drive schedules
/// deterministically.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> ManualClock {
        ManualClock {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep_until(&self, instant: NaiveDateTime) {
        if instant > self.now.get() {
            self.now.set(instant);
        }
    }
}
