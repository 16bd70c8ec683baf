//! Pomodoro timer core: duration settings, the session state machine, and the
//! values derived from it for display.

pub mod duration;
pub mod format;
pub mod progress;
pub mod session;
pub mod timer;

pub use duration::TimerRunConfig;
pub use progress::ProgressView;
pub use session::{Session, SessionLabel, TickOutcome};
pub use timer::{Pomodoro, TimerState};
