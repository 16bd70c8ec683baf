//! Focus and break duration settings.
//!
//! Both counters are clamped at the point of mutation, so an out-of-range
//! duration is never observable.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed focus duration in minutes
pub const FOCUS_MINUTES: RangeInclusive<u32> = 5..=60;
/// Allowed break duration in minutes
pub const BREAK_MINUTES: RangeInclusive<u32> = 1..=15;

/// Minutes added or removed by one focus +/- action
pub const FOCUS_STEP: i32 = 5;
/// Minutes added or removed by one break +/- action
pub const BREAK_STEP: i32 = 1;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Apply a signed step to `current`, never leaving `[min, max]` in the
/// direction of travel.
///
/// Positive amounts are capped at `max`, negative amounts are floored at `min`.
pub fn adjust(current: u32, amount: i32, min: u32, max: u32) -> u32 {
    if amount > 0 {
        current.saturating_add(amount.unsigned_abs()).min(max)
    } else {
        current.saturating_sub(amount.unsigned_abs()).max(min)
    }
}

/// User-chosen lengths of the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerRunConfig {
    pub focus_minutes: u32,
    pub break_minutes: u32,
}

impl Default for TimerRunConfig {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl TimerRunConfig {
    /// Build a config, clamping both values into their allowed ranges
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: focus_minutes.clamp(*FOCUS_MINUTES.start(), *FOCUS_MINUTES.end()),
            break_minutes: break_minutes.clamp(*BREAK_MINUTES.start(), *BREAK_MINUTES.end()),
        }
    }

    pub fn change_focus(&mut self, amount: i32) {
        self.focus_minutes = adjust(
            self.focus_minutes,
            amount,
            *FOCUS_MINUTES.start(),
            *FOCUS_MINUTES.end(),
        );
    }

    pub fn change_break(&mut self, amount: i32) {
        self.break_minutes = adjust(
            self.break_minutes,
            amount,
            *BREAK_MINUTES.start(),
            *BREAK_MINUTES.end(),
        );
    }

    pub fn increase_focus(&mut self) {
        self.change_focus(FOCUS_STEP);
    }

    pub fn decrease_focus(&mut self) {
        self.change_focus(-FOCUS_STEP);
    }

    pub fn increase_break(&mut self) {
        self.change_break(BREAK_STEP);
    }

    pub fn decrease_break(&mut self) {
        self.change_break(-BREAK_STEP);
    }
}
