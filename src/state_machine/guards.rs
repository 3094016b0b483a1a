use super::errors::{GuardError, GuardResult};
use super::events::ScheduleEvent;
use chrono::{DateTime, Utc};

/// Visibility after reconciling the flag with a pending schedule
pub fn effective_enabled(
    enabled: bool,
    schedule_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match schedule_date {
        Some(date) if date > now => false,
        _ => enabled,
    }
}

/// Whether the flag may be switched on at `now`
pub fn editable(schedule_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    schedule_date.map_or(true, |date| date <= now)
}

/// Trait for implementing schedule event guards
pub trait ScheduleGuard {
    /// Check if an event may be applied to an entity with `schedule_date`
    fn check(
        &self,
        event: &ScheduleEvent,
        schedule_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> GuardResult<()>;

    /// Get a description of this guard for logging
    fn description(&self) -> &'static str;
}

/// Refuses `Enable` while the schedule date is still ahead
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingScheduleGuard;

impl ScheduleGuard for PendingScheduleGuard {
    fn check(
        &self,
        event: &ScheduleEvent,
        schedule_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> GuardResult<()> {
        match schedule_date {
            Some(schedule_date) if event.is_gated() && schedule_date > now => {
                Err(GuardError::ScheduleLocked { schedule_date })
            }
            _ => Ok(()),
        }
    }

    fn description(&self) -> &'static str {
        "Enabling must wait until the schedule date has passed"
    }
}
