//! User action dispatch.

use std::time::Instant;

use tracing::{debug, info};

use super::{Action, App};
use crate::pomodoro::TimerState;
use crate::ui::toast::ToastType;

impl App {
    /// Whether `action` would do anything right now; disabled buttons are
    /// rendered dimmed and ignore clicks.
    pub fn is_enabled(&self, action: Action) -> bool {
        if action.is_duration_edit() {
            return self.timer.durations_editable();
        }
        match action {
            Action::Stop => self.timer.stop_enabled(),
            _ => true,
        }
    }

    /// Apply a user action and keep the tick source in step with the timer
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if !self.is_enabled(action) {
            self.reject(action);
            return;
        }

        match action {
            Action::IncreaseFocus => {
                self.timer.increase_focus();
            }
            Action::DecreaseFocus => {
                self.timer.decrease_focus();
            }
            Action::IncreaseBreak => {
                self.timer.increase_break();
            }
            Action::DecreaseBreak => {
                self.timer.decrease_break();
            }
            Action::TogglePlayPause => {
                let was_idle = self.timer.state() == TimerState::Idle;
                self.timer.toggle_play_pause();
                match self.timer.state() {
                    TimerState::Running if was_idle => info!("timer started"),
                    TimerState::Running => info!("timer resumed"),
                    TimerState::Paused => info!("timer paused"),
                    TimerState::Idle => {}
                }
            }
            Action::Stop => {
                self.timer.stop();
                info!("timer stopped");
            }
            Action::ToggleHelp => {
                self.help_menu_open = !self.help_menu_open;
            }
            Action::Quit => {
                self.shutdown();
            }
        }

        if action.is_duration_edit() {
            let config = self.timer.config();
            debug!(
                focus = config.focus_minutes,
                brk = config.break_minutes,
                "durations changed"
            );
        }

        self.sync_schedule(now);
    }

    fn reject(&mut self, action: Action) {
        debug!(?action, "action ignored while disabled");
        let message = if action.is_duration_edit() {
            "Stop the timer to change durations"
        } else {
            "Nothing to stop"
        };
        self.toast_manager.push(message, ToastType::Warning);
    }
}
