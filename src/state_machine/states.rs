use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of a schedulable entity at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleState {
    /// No schedule date, flag on
    ManualOn,
    /// No schedule date, flag off
    ManualOff,
    /// Schedule date in the future; forced off and the flag is locked
    ScheduledPending,
    /// Schedule date reached; the flag applies and is editable again
    ScheduledElapsed,
}

impl ScheduleState {
    /// Classify the two stored fields against `now`.
    ///
    /// A schedule date equal to `now` counts as elapsed.
    pub fn classify(
        enabled: bool,
        schedule_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        match schedule_date {
            Some(date) if date > now => Self::ScheduledPending,
            Some(_) => Self::ScheduledElapsed,
            None if enabled => Self::ManualOn,
            None => Self::ManualOff,
        }
    }

    /// Whether the `enabled` flag may currently be switched on
    pub fn is_editable(&self) -> bool {
        !self.is_pending()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::ScheduledPending)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::ScheduledPending | Self::ScheduledElapsed)
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualOn => write!(f, "manual_on"),
            Self::ManualOff => write!(f, "manual_off"),
            Self::ScheduledPending => write!(f, "scheduled_pending"),
            Self::ScheduledElapsed => write!(f, "scheduled_elapsed"),
        }
    }
}

impl std::str::FromStr for ScheduleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual_on" => Ok(Self::ManualOn),
            "manual_off" => Ok(Self::ManualOff),
            "scheduled_pending" => Ok(Self::ScheduledPending),
            "scheduled_elapsed" => Ok(Self::ScheduledElapsed),
            _ => Err(format!("Invalid schedule state: {s}")),
        }
    }
}

/// Everything derived from `enabled` and `scheduleDate` at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub state: ScheduleState,
    /// Stored flag, as the user last set it
    pub enabled: bool,
    pub effective_enabled: bool,
    pub editable: bool,
    pub evaluated_at: DateTime<Utc>,
}

impl ScheduleSnapshot {
    pub fn evaluate(
        enabled: bool,
        schedule_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let state = ScheduleState::classify(enabled, schedule_date, now);
        Self {
            state,
            enabled,
            effective_enabled: enabled && !state.is_pending(),
            editable: state.is_editable(),
            evaluated_at: now,
        }
    }

    /// Stored flag is on but a pending schedule holds it back
    pub fn is_held_back(&self) -> bool {
        self.enabled && !self.effective_enabled
    }
}
