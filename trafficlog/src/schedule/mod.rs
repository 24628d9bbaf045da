mod clock;
mod persistence_failure_policy;
mod round_report;
mod schedule_error;
mod schedule_mode;
mod schedule_window;
mod scheduler_state;
mod window_scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use persistence_failure_policy::PersistenceFailurePolicy;
pub use round_report::{RoundReport, ScheduleEvent, ScheduleSummary};
pub use schedule_error::ScheduleError;
pub use schedule_mode::ScheduleMode;
pub use schedule_window::ScheduleWindow;
pub use scheduler_state::SchedulerState;
pub use window_scheduler::WindowScheduler;
