use chrono::{DateTime, Utc};
use thiserror::Error;

/// Guard failures for schedule events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("Cannot enable before the schedule date {schedule_date}")]
    ScheduleLocked { schedule_date: DateTime<Utc> },
}

pub type GuardResult<T> = Result<T, GuardError>;
