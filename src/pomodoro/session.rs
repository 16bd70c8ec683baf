//! A single focus or break phase and its per-second countdown.

use std::fmt;

use super::duration::TimerRunConfig;

/// Which phase the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLabel {
    Focusing,
    OnBreak,
}

impl SessionLabel {
    /// The phase that follows this one
    pub fn next(self) -> Self {
        match self {
            SessionLabel::Focusing => SessionLabel::OnBreak,
            SessionLabel::OnBreak => SessionLabel::Focusing,
        }
    }

    /// Configured length of this phase in minutes
    pub fn duration_minutes(self, config: &TimerRunConfig) -> u32 {
        match self {
            SessionLabel::Focusing => config.focus_minutes,
            SessionLabel::OnBreak => config.break_minutes,
        }
    }
}

impl fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionLabel::Focusing => f.write_str("Focusing"),
            SessionLabel::OnBreak => f.write_str("On Break"),
        }
    }
}

/// What a single tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was counted down
    Counted,
    /// Remaining time was already zero; the session rolled over into this phase
    PhaseChanged(SessionLabel),
}

/// An active (running or paused) phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub label: SessionLabel,
    pub time_remaining_seconds: u32,
}

impl Session {
    /// A fresh session in the given phase, with the full configured duration
    pub fn new(label: SessionLabel, config: &TimerRunConfig) -> Self {
        Self {
            label,
            time_remaining_seconds: label.duration_minutes(config) * 60,
        }
    }

    /// Every timer starts with a focus phase
    pub fn start(config: &TimerRunConfig) -> Self {
        Self::new(SessionLabel::Focusing, config)
    }

    /// Advance by one second.
    ///
    /// The rollover happens only when the remaining time is already zero at the
    /// start of the tick. `config` is read at the moment of rollover, so the new
    /// phase always gets the current duration.
    pub fn tick(&mut self, config: &TimerRunConfig) -> TickOutcome {
        if self.time_remaining_seconds == 0 {
            *self = Self::new(self.label.next(), config);
            TickOutcome::PhaseChanged(self.label)
        } else {
            self.time_remaining_seconds -= 1;
            TickOutcome::Counted
        }
    }
}
