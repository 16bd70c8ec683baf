//! File logging via tracing. Stdout belongs to the TUI, so nothing is logged there.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "pomotui.log";

/// Directory holding the log file
pub fn log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("Could not find local data directory")?;
    Ok(data_dir.join("pomotui"))
}

/// Parse a configured level name, falling back to `INFO` for unknown names
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// Install the global subscriber writing to `<dir>/pomotui.log`.
///
/// The returned guard flushes buffered lines when dropped and must be kept
/// alive for the lifetime of the program.
pub fn init(config: &LoggingConfig, dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" trace "), Level::TRACE);
        assert_eq!(parse_level("loud"), Level::INFO);
    }
}
