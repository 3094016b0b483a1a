// Scheduling gate
//
// Time-gated enablement for every schedulable entity: the four schedule
// states, the events that edit the two stored fields, and the guard that
// keeps the flag locked while a schedule date is pending.

pub mod errors;
pub mod events;
pub mod gate;
pub mod guards;
pub mod states;

// Re-export main types for convenient access
pub use errors::{GuardError, GuardResult};
pub use events::ScheduleEvent;
pub use gate::{apply_event, Schedulable, SchedulingGate};
pub use guards::{editable, effective_enabled, PendingScheduleGuard, ScheduleGuard};
pub use states::{ScheduleSnapshot, ScheduleState};
