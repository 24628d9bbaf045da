use std::fmt::Display;

/// lifecycle of a [`super::WindowScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    WaitingForStart,
    Running,
    Done,
}

impl Display for SchedulerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SchedulerState::Idle => "idle",
            SchedulerState::WaitingForStart => "waiting for start",
            SchedulerState::Running => "running",
            SchedulerState::Done => "done",
        };
        write!(f, "{s}")
    }
}
