//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::pomodoro::TimerRunConfig;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Focus session length in minutes (5-60)
    #[arg(short, long)]
    pub focus: Option<u32>,

    /// Break length in minutes (1-15)
    #[arg(short, long = "break")]
    pub break_minutes: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable the bell and desktop notifications
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        config.durations = TimerRunConfig::new(
            self.focus.unwrap_or(config.durations.focus_minutes),
            self.break_minutes.unwrap_or(config.durations.break_minutes),
        );
        if self.quiet {
            config.notifications.silence();
        }
    }
}
