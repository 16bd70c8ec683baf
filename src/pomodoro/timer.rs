//! The timer state machine: configuration, the active session, and whether
//! the countdown is running, owned together as one aggregate.

use super::duration::TimerRunConfig;
use super::session::{Session, TickOutcome};

/// Coarse state derived from the session and run flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No session
    Idle,
    /// Session present, counting down
    Running,
    /// Session present, countdown suspended
    Paused,
}

/// Pomodoro timer state aggregate.
///
/// Invariant: `running` implies `session.is_some()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pomodoro {
    config: TimerRunConfig,
    session: Option<Session>,
    running: bool,
}

impl Pomodoro {
    pub fn new(config: TimerRunConfig) -> Self {
        Self {
            config,
            session: None,
            running: false,
        }
    }

    pub fn config(&self) -> &TimerRunConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> TimerState {
        match (&self.session, self.running) {
            (None, _) => TimerState::Idle,
            (Some(_), true) => TimerState::Running,
            (Some(_), false) => TimerState::Paused,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state() == TimerState::Paused
    }

    /// Duration controls only work while no session exists, running or paused
    pub fn durations_editable(&self) -> bool {
        self.session.is_none()
    }

    pub fn stop_enabled(&self) -> bool {
        self.session.is_some()
    }

    /// Start from idle, or resume a paused session where it left off.
    /// Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        if self.session.is_none() {
            self.session = Some(Session::start(&self.config));
        }
        self.running = true;
        true
    }

    /// Suspend the countdown, keeping the session. Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Start/resume when not running, pause when running
    pub fn toggle_play_pause(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Clear the session and stop the countdown. Configured durations are kept.
    /// Returns false if there was nothing to stop.
    pub fn stop(&mut self) -> bool {
        let had_session = self.session.take().is_some();
        self.running = false;
        had_session
    }

    /// Advance the running session by one second.
    ///
    /// Returns `None` when the timer is not running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.running {
            return None;
        }
        let config = self.config;
        self.session.as_mut().map(|session| session.tick(&config))
    }

    pub fn increase_focus(&mut self) -> bool {
        self.edit_durations(TimerRunConfig::increase_focus)
    }

    pub fn decrease_focus(&mut self) -> bool {
        self.edit_durations(TimerRunConfig::decrease_focus)
    }

    pub fn increase_break(&mut self) -> bool {
        self.edit_durations(TimerRunConfig::increase_break)
    }

    pub fn decrease_break(&mut self) -> bool {
        self.edit_durations(TimerRunConfig::decrease_break)
    }

    /// Apply a duration edit unless a session is in progress
    fn edit_durations(&mut self, edit: fn(&mut TimerRunConfig)) -> bool {
        if !self.durations_editable() {
            return false;
        }
        edit(&mut self.config);
        true
    }
}
