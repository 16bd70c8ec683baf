//! Fixed-interval tick source owned by the app.
//!
//! The event loop asks the schedule how long it may block and how many ticks
//! have come due. A disarmed schedule never produces ticks.

use std::time::{Duration, Instant};

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl TickSchedule {
    /// A zero interval is raised to one millisecond
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    /// Arm the schedule; the first tick comes one interval after `now`.
    /// Re-arming an active schedule keeps its current deadline.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Disarm the schedule. Pending ticks are discarded.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left before the next tick, or `None` when disarmed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of ticks due at `now`. Each tick is reported exactly once.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if due > now {
            return 0;
        }
        let missed = now.duration_since(due).as_nanos() / self.interval.as_nanos() + 1;
        let count = u32::try_from(missed).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.interval * count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_yields_nothing() {
        let mut schedule = TickSchedule::default();
        let now = Instant::now();
        assert!(!schedule.is_active());
        assert_eq!(schedule.time_until_next(now), None);
        assert_eq!(schedule.take_due(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_first_tick_after_one_interval() {
        let mut schedule = TickSchedule::default();
        let start = Instant::now();
        schedule.start(start);

        assert_eq!(schedule.take_due(start + Duration::from_millis(999)), 0);
        assert_eq!(schedule.take_due(start + Duration::from_millis(1000)), 1);
        // Already reported
        assert_eq!(schedule.take_due(start + Duration::from_millis(1500)), 0);
        assert_eq!(
            schedule.time_until_next(start + Duration::from_millis(1500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_catches_up_on_missed_ticks() {
        let mut schedule = TickSchedule::default();
        let start = Instant::now();
        schedule.start(start);
        assert_eq!(schedule.take_due(start + Duration::from_millis(3200)), 3);
        assert_eq!(schedule.take_due(start + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_stop_discards_pending_ticks() {
        let mut schedule = TickSchedule::default();
        let start = Instant::now();
        schedule.start(start);
        schedule.stop();
        assert_eq!(schedule.take_due(start + Duration::from_secs(5)), 0);

        // Restart counts from the new start
        let restart = start + Duration::from_secs(5);
        schedule.start(restart);
        assert_eq!(schedule.take_due(restart + Duration::from_millis(500)), 0);
        assert_eq!(schedule.take_due(restart + Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_long_gap_is_counted_in_one_step() {
        let mut schedule = TickSchedule::default();
        let start = Instant::now();
        schedule.start(start);
        let later = start + Duration::from_secs(8 * 3600) + Duration::from_millis(400);
        assert_eq!(schedule.take_due(later), 28800);
        assert_eq!(
            schedule.time_until_next(later),
            Some(Duration::from_millis(600))
        );
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let mut schedule = TickSchedule::new(Duration::ZERO);
        let start = Instant::now();
        schedule.start(start);
        assert_eq!(schedule.take_due(start), 0);
        assert_eq!(schedule.take_due(start + Duration::from_millis(5)), 5);
    }

    #[test]
    fn test_restart_while_active_keeps_deadline() {
        let mut schedule = TickSchedule::default();
        let start = Instant::now();
        schedule.start(start);
        schedule.start(start + Duration::from_millis(900));
        assert_eq!(schedule.take_due(start + Duration::from_secs(1)), 1);
    }
}
