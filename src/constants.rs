//! Centralized constants for the commit schedule and output formatting.

/// Hour of day (local) at which the session starts.
pub const START_HOUR: u32 = 11;

/// Minute past `START_HOUR` at which the session starts.
pub const START_MINUTE: u32 = 30;

/// Length of the grace period measured from the start time.
pub const GRACE_PERIOD_HOURS: i64 = 5;

/// Maximum gap between commits once the grace period is over.
pub const COMMIT_INTERVAL_MINUTES: u32 = 60;

/// Timestamp format for display (YYYY-MM-DD HH:MM:SS).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
