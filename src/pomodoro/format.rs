//! Human-readable duration strings.

/// Format a whole number of minutes as `HH:MM`
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a number of seconds as `HH:MM:SS`
pub fn seconds_to_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds % 60)
}
