//! Read-only values derived from the timer for display.
//!
//! Nothing here is stored; everything is recomputed on each draw.

use chrono::{DateTime, Duration as ChronoDuration, Local};

use super::duration::TimerRunConfig;
use super::format::{minutes_to_duration, seconds_to_duration};
use super::session::{Session, SessionLabel};
use super::timer::Pomodoro;

/// Configured length of the session's current phase
pub fn active_duration_minutes(session: &Session, config: &TimerRunConfig) -> u32 {
    session.label.duration_minutes(config)
}

/// Percentage of the current phase that has elapsed.
///
/// Clamped to `[0, 100]` so a session longer than its phase never draws a
/// negative bar.
pub fn progress_percent(session: &Session, config: &TimerRunConfig) -> f64 {
    let total = f64::from(active_duration_minutes(session, config)) * 60.0;
    if total <= 0.0 {
        return 100.0;
    }
    let percent = (1.0 - f64::from(session.time_remaining_seconds) / total) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Everything the progress section shows for an active session
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub label: SessionLabel,
    /// e.g. "Focusing for 00:25 minutes"
    pub title: String,
    /// e.g. "00:24:59 remaining"
    pub subtitle: String,
    pub percent: f64,
    pub paused: bool,
    /// Wall-clock end of the phase; only known while the countdown runs
    pub ends_at: Option<DateTime<Local>>,
}

impl ProgressView {
    /// Derive the view for the timer's session, or `None` when idle
    pub fn from_timer(timer: &Pomodoro, now: DateTime<Local>) -> Option<Self> {
        let session = timer.session()?;
        let config = timer.config();
        let paused = !timer.is_running();
        let ends_at = (!paused)
            .then(|| now + ChronoDuration::seconds(i64::from(session.time_remaining_seconds)));

        Some(Self {
            label: session.label,
            title: format!(
                "{} for {} minutes",
                session.label,
                minutes_to_duration(active_duration_minutes(session, config))
            ),
            subtitle: format!(
                "{} remaining",
                seconds_to_duration(session.time_remaining_seconds)
            ),
            percent: progress_percent(session, config),
            paused,
            ends_at,
        })
    }

    /// Gauge value as a whole percentage
    pub fn percent_u16(&self) -> u16 {
        self.percent.floor() as u16
    }
}
