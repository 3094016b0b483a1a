use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Edits to the two schedule fields of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ScheduleEvent {
    /// Switch the flag on; refused while a schedule is pending
    Enable,
    /// Switch the flag off; always allowed
    Disable,
    /// Set or move the go-live date
    Reschedule(DateTime<Utc>),
    ClearSchedule,
}

impl ScheduleEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Reschedule(_) => "reschedule",
            Self::ClearSchedule => "clear_schedule",
        }
    }

    /// Event for a form that sets the flag to `enabled`
    pub fn set_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enable
        } else {
            Self::Disable
        }
    }

    /// Whether a pending schedule can block this event
    pub fn is_gated(&self) -> bool {
        matches!(self, Self::Enable)
    }
}
