use chrono::{DateTime, Local, Utc};

/// Relative label stamped on freshly created jobs and applications.
pub const JUST_NOW: &str = "just now";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Clock-face label for chat messages, e.g. "10:30 AM".
pub fn clock_time() -> String {
    Local::now().format("%-I:%M %p").to_string()
}
