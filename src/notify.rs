//! Phase change notifications.
//!
//! Every sink is best effort: the caller logs a failure and carries on.

use std::io::{self, Write};

use anyhow::{Context, Result};
use notify_rust::Notification;

use crate::config::NotificationConfig;
use crate::pomodoro::SessionLabel;

/// Something that can announce the start of a new phase
pub trait NotificationSink {
    fn notify(&mut self, label: SessionLabel) -> Result<()>;
}

/// Rings the terminal bell
pub struct TerminalBell;

impl NotificationSink for TerminalBell {
    fn notify(&mut self, _label: SessionLabel) -> Result<()> {
        let mut stdout = io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .context("Failed to ring terminal bell")
    }
}

/// Shows a desktop notification
pub struct DesktopNotification;

impl NotificationSink for DesktopNotification {
    fn notify(&mut self, label: SessionLabel) -> Result<()> {
        Notification::new()
            .summary("Pomodoro")
            .body(&phase_message(label))
            .show()
            .context("Failed to show desktop notification")?;
        Ok(())
    }
}

/// Fans one notification out to several sinks.
///
/// All sinks are tried even if an earlier one fails; the first error is returned.
#[derive(Default)]
pub struct Notifier {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the sinks enabled in `config`
    pub fn from_config(config: &NotificationConfig) -> Self {
        let mut notifier = Self::new();
        if config.bell {
            notifier = notifier.with(TerminalBell);
        }
        if config.desktop {
            notifier = notifier.with(DesktopNotification);
        }
        notifier
    }

    pub fn with(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl NotificationSink for Notifier {
    fn notify(&mut self, label: SessionLabel) -> Result<()> {
        let mut first_err = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.notify(label) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Text shown when a phase begins
pub fn phase_message(label: SessionLabel) -> String {
    match label {
        SessionLabel::Focusing => "Break is over, time to focus".to_string(),
        SessionLabel::OnBreak => "Focus session done, take a break".to_string(),
    }
}
