//! Application state and core data types for pomotui.

mod actions;
mod state;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::notify::{phase_message, NotificationSink, Notifier};
use crate::pomodoro::{Pomodoro, TickOutcome, TimerRunConfig};
use crate::schedule::TickSchedule;
use crate::ui::toast::{ToastManager, ToastType};

pub use state::{Action, ButtonAreas};

/// Longest the event loop blocks waiting for input when no tick is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    /// Timer state machine (durations, session, run flag)
    pub timer: Pomodoro,
    /// Tick source; armed exactly while the timer runs
    schedule: TickSchedule,
    /// Phase change announcements
    notifier: Box<dyn NotificationSink>,
    /// Toast notification manager
    pub toast_manager: ToastManager,
    /// Whether the help overlay is open (toggled by '?')
    pub help_menu_open: bool,
    /// Should quit
    pub should_quit: bool,
    /// Button rectangles from the last draw, used for mouse hit-testing
    pub button_areas: ButtonAreas,
}

impl App {
    /// Create a new application instance from loaded configuration
    pub fn new(config: &Config) -> Self {
        Self::with_notifier(
            config.durations,
            Notifier::from_config(&config.notifications),
        )
    }

    pub fn with_notifier(
        durations: TimerRunConfig,
        notifier: impl NotificationSink + 'static,
    ) -> Self {
        Self {
            timer: Pomodoro::new(durations),
            schedule: TickSchedule::default(),
            notifier: Box::new(notifier),
            toast_manager: ToastManager::new(),
            help_menu_open: false,
            should_quit: false,
            button_areas: ButtonAreas::default(),
        }
    }

    /// How long the event loop may wait for input before the next tick is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.schedule
            .time_until_next(now)
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL))
    }

    pub fn tick_scheduled(&self) -> bool {
        self.schedule.is_active()
    }

    /// Feed every tick due at `now` into the timer. Returns the number applied.
    ///
    /// Ticks are applied one at a time, but a catch-up that crosses several
    /// phase changes announces only the last one.
    pub fn on_tick(&mut self, now: Instant) -> u32 {
        let due = self.schedule.take_due(now);
        let mut applied = 0;
        let mut transitions = 0u32;
        let mut last_phase = None;
        for _ in 0..due {
            match self.timer.tick() {
                Some(TickOutcome::Counted) => {}
                Some(TickOutcome::PhaseChanged(label)) => {
                    transitions += 1;
                    last_phase = Some(label);
                }
                None => break,
            }
            applied += 1;
        }
        if due > 1 {
            debug!(due, applied, "caught up on missed ticks");
        }
        if transitions > 1 {
            debug!(transitions, "coalesced phase changes");
        }
        if let Some(label) = last_phase {
            info!(phase = %label, "phase changed");
            if let Err(e) = self.notifier.notify(label) {
                warn!("notification failed: {:#}", e);
            }
            self.toast_manager.push(phase_message(label), ToastType::Info);
        }
        applied
    }

    /// Arm or disarm the tick source to match the timer's run flag
    fn sync_schedule(&mut self, now: Instant) {
        if self.timer.is_running() && !self.should_quit {
            self.schedule.start(now);
        } else {
            self.schedule.stop();
        }
    }

    /// Tear down: no tick may outlive the app loop
    pub fn shutdown(&mut self) {
        self.schedule.stop();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::{Session, SessionLabel, TimerState};
    use anyhow::Result;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<SessionLabel>>>,
        fail: bool,
    }

    impl NotificationSink for Recorder {
        fn notify(&mut self, label: SessionLabel) -> Result<()> {
            self.seen.borrow_mut().push(label);
            if self.fail {
                anyhow::bail!("playback blocked");
            }
            Ok(())
        }
    }

    fn test_app(focus: u32, brk: u32, recorder: &Recorder) -> App {
        App::with_notifier(TimerRunConfig::new(focus, brk), recorder.clone())
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_start_arms_schedule_and_ticks() {
        let recorder = Recorder::default();
        let mut app = test_app(25, 5, &recorder);
        let t0 = Instant::now();

        assert!(!app.tick_scheduled());
        app.dispatch(Action::TogglePlayPause, t0);
        assert!(app.tick_scheduled());

        assert_eq!(app.on_tick(t0 + secs(1)), 1);
        assert_eq!(
            app.timer.session(),
            Some(&Session {
                label: SessionLabel::Focusing,
                time_remaining_seconds: 1499
            })
        );
    }

    #[test]
    fn test_pause_disarms_schedule() {
        let recorder = Recorder::default();
        let mut app = test_app(25, 5, &recorder);
        let t0 = Instant::now();

        app.dispatch(Action::TogglePlayPause, t0);
        app.on_tick(t0 + secs(2));
        app.dispatch(Action::TogglePlayPause, t0 + secs(2));
        assert_eq!(app.timer.state(), TimerState::Paused);
        assert!(!app.tick_scheduled());

        // No ticks counted while paused
        assert_eq!(app.on_tick(t0 + secs(60)), 0);
        assert_eq!(app.timer.session().unwrap().time_remaining_seconds, 1498);

        // Resume picks up where it left off
        let t1 = t0 + secs(60);
        app.dispatch(Action::TogglePlayPause, t1);
        assert_eq!(app.on_tick(t1 + secs(1)), 1);
        assert_eq!(app.timer.session().unwrap().time_remaining_seconds, 1497);
    }

    #[test]
    fn test_stop_clears_session_and_schedule() {
        let recorder = Recorder::default();
        let mut app = test_app(30, 10, &recorder);
        let t0 = Instant::now();

        app.dispatch(Action::TogglePlayPause, t0);
        app.dispatch(Action::Stop, t0 + secs(3));

        assert_eq!(app.timer.state(), TimerState::Idle);
        assert!(!app.tick_scheduled());
        assert_eq!(app.timer.config(), &TimerRunConfig::new(30, 10));
        assert_eq!(app.on_tick(t0 + secs(10)), 0);
    }

    #[test]
    fn test_phase_change_notifies() {
        let recorder = Recorder::default();
        let mut app = test_app(5, 1, &recorder);
        let t0 = Instant::now();

        app.dispatch(Action::TogglePlayPause, t0);
        // 300 ticks to reach zero, one more to roll over
        assert_eq!(app.on_tick(t0 + secs(301)), 301);

        let session = app.timer.session().unwrap();
        assert_eq!(session.label, SessionLabel::OnBreak);
        assert_eq!(session.time_remaining_seconds, 60);
        assert_eq!(*recorder.seen.borrow(), vec![SessionLabel::OnBreak]);
        assert!(!app.toast_manager.is_empty());
    }

    #[test]
    fn test_notification_failure_is_ignored() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut app = test_app(5, 1, &recorder);
        let t0 = Instant::now();

        app.dispatch(Action::TogglePlayPause, t0);
        app.on_tick(t0 + secs(301));
        // Countdown continues in the new phase
        app.on_tick(t0 + secs(302));

        let session = app.timer.session().unwrap();
        assert_eq!(session.label, SessionLabel::OnBreak);
        assert_eq!(session.time_remaining_seconds, 59);
        assert!(app.tick_scheduled());
    }

    #[test]
    fn test_long_catch_up_notifies_once() {
        let recorder = Recorder::default();
        let mut app = test_app(25, 5, &recorder);
        let t0 = Instant::now();

        app.dispatch(Action::TogglePlayPause, t0);
        // Eight hours asleep: 28800 ticks spanning many phase changes
        assert_eq!(app.on_tick(t0 + secs(8 * 3600)), 28800);

        // A focus phase spans 1501 ticks and a break 301 (the rollover tick
        // included), so 15 full cycles take 27030 ticks. The remaining 1770
        // finish a focus phase and leave 31s of break.
        let session = app.timer.session().unwrap();
        assert_eq!(session.label, SessionLabel::OnBreak);
        assert_eq!(session.time_remaining_seconds, 31);
        assert_eq!(*recorder.seen.borrow(), vec![SessionLabel::OnBreak]);
        assert_eq!(app.toast_manager.visible_toasts().len(), 1);
    }

    #[test]
    fn test_poll_timeout() {
        let recorder = Recorder::default();
        let mut app = test_app(25, 5, &recorder);
        let t0 = Instant::now();
        assert_eq!(app.poll_timeout(t0), IDLE_POLL);

        app.dispatch(Action::TogglePlayPause, t0);
        assert_eq!(
            app.poll_timeout(t0 + Duration::from_millis(900)),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_shutdown_disarms_schedule() {
        let recorder = Recorder::default();
        let mut app = test_app(25, 5, &recorder);
        app.dispatch(Action::TogglePlayPause, Instant::now());
        app.shutdown();
        assert!(!app.tick_scheduled());
        assert!(app.should_quit);
    }
}
