use crate::clock::Clock;
use crate::constants::{
    COMMIT_INTERVAL_MINUTES, GRACE_PERIOD_HOURS, START_HOUR, START_MINUTE, TIMESTAMP_FORMAT,
};
use chrono::{Duration, NaiveDateTime, Timelike};
use log::{debug, info};
use std::fmt;
use std::io::Write;

/// Reference points for the current session, all on the calendar date of `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub now: NaiveDateTime,
    pub start_time: NaiveDateTime,
    pub threshold: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Before the threshold; hourly commits are encouraged but optional.
    GracePeriod,
    /// At or past the threshold; hourly commits are required.
    CommitRequired,
}

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Cannot place start time {hour:02}:{minute:02}:00 on {date}")]
    InvalidStartTime {
        date: String,
        hour: u32,
        minute: u32,
    },
    #[error("Threshold {hours} hours after {start} is out of range")]
    ThresholdOutOfRange { start: String, hours: i64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Schedule {
    /// Derives the start time and threshold for the date `now` falls on.
    ///
    /// Runs before the start time still use the same calendar date, so an
    /// early-morning `now` reports the grace period.
    pub fn for_day_of(now: NaiveDateTime) -> Result<Self, StatusError> {
        let start_time = now
            .with_hour(START_HOUR)
            .and_then(|t| t.with_minute(START_MINUTE))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(|| StatusError::InvalidStartTime {
                date: now.date().to_string(),
                hour: START_HOUR,
                minute: START_MINUTE,
            })?;
        let threshold = start_time
            .checked_add_signed(Duration::hours(GRACE_PERIOD_HOURS))
            .ok_or_else(|| StatusError::ThresholdOutOfRange {
                start: start_time.format(TIMESTAMP_FORMAT).to_string(),
                hours: GRACE_PERIOD_HOURS,
            })?;
        Ok(Schedule {
            now,
            start_time,
            threshold,
        })
    }

    pub fn status(&self) -> Status {
        if self.now < self.threshold {
            Status::GracePeriod
        } else {
            Status::CommitRequired
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub schedule: Schedule,
    pub status: Status,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Current Time: {}",
            self.schedule.now.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(
            f,
            "{}-Hour Mark:  {}",
            GRACE_PERIOD_HOURS,
            self.schedule.threshold.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f)?;
        match self.status {
            Status::GracePeriod => {
                writeln!(f, "[STATUS] We are in the first {GRACE_PERIOD_HOURS} hours.")?;
                write!(
                    f,
                    "You don't *have* to commit every hour yet, but it's good practice!"
                )
            }
            Status::CommitRequired => {
                writeln!(f, "[URGENT] We are past the {GRACE_PERIOD_HOURS}-hour mark.")?;
                write!(
                    f,
                    "RULE ACTIVE: You MUST commit code at least once every {COMMIT_INTERVAL_MINUTES} minutes."
                )
            }
        }
    }
}

pub struct StatusChecker<C> {
    clock: C,
}

impl<C: Clock> StatusChecker<C> {
    pub fn new(clock: C) -> Self {
        StatusChecker { clock }
    }

    /// Reads the clock once and decides which side of the threshold it is on.
    pub fn check(&self) -> Result<StatusReport, StatusError> {
        let now = self.clock.now();
        let schedule = Schedule::for_day_of(now)?;
        debug!(
            "start time {}, threshold {}",
            schedule.start_time.format(TIMESTAMP_FORMAT),
            schedule.threshold.format(TIMESTAMP_FORMAT)
        );
        let status = schedule.status();
        info!("status at {}: {:?}", now.format(TIMESTAMP_FORMAT), status);
        Ok(StatusReport { schedule, status })
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<StatusReport, StatusError> {
        let report = self.check()?;
        writeln!(out, "{report}")?;
        out.flush()?;
        Ok(report)
    }
}
