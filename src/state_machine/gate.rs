//! The scheduling gate shared by shelves, pages and standalone content.

use super::errors::GuardError;
use super::events::ScheduleEvent;
use super::guards::{self, PendingScheduleGuard, ScheduleGuard};
use super::states::ScheduleSnapshot;
use crate::clock::{Clock, SystemClock};
use crate::constants::events;
use crate::log_schedule;
use crate::models::{PageConfig, ScheduledContent, ShelfConfig};
use crate::outcome::EditOutcome;
use chrono::{DateTime, Utc};

/// An entity carrying a manual `enabled` flag and an optional go-live date
pub trait Schedulable {
    /// Label used in log events, e.g. `shelf:highlights`
    fn subject(&self) -> String;

    fn enabled(&self) -> bool;
    fn schedule_date(&self) -> Option<DateTime<Utc>>;
    fn set_enabled(&mut self, enabled: bool);
    fn set_schedule_date(&mut self, schedule_date: Option<DateTime<Utc>>);

    fn effective_enabled(&self, now: DateTime<Utc>) -> bool {
        guards::effective_enabled(self.enabled(), self.schedule_date(), now)
    }

    fn is_editable(&self, now: DateTime<Utc>) -> bool {
        guards::editable(self.schedule_date(), now)
    }

    fn snapshot(&self, now: DateTime<Utc>) -> ScheduleSnapshot {
        ScheduleSnapshot::evaluate(self.enabled(), self.schedule_date(), now)
    }
}

macro_rules! impl_schedulable {
    ($ty:ty, $label:literal) => {
        impl Schedulable for $ty {
            fn subject(&self) -> String {
                format!(concat!($label, ":{}"), self.id)
            }

            fn enabled(&self) -> bool {
                self.enabled
            }

            fn schedule_date(&self) -> Option<DateTime<Utc>> {
                self.schedule_date
            }

            fn set_enabled(&mut self, enabled: bool) {
                self.enabled = enabled;
            }

            fn set_schedule_date(&mut self, schedule_date: Option<DateTime<Utc>>) {
                self.schedule_date = schedule_date;
            }
        }
    };
}

impl_schedulable!(ShelfConfig, "shelf");
impl_schedulable!(PageConfig, "page");
impl_schedulable!(ScheduledContent, "content");

/// Apply `event` to `entity` as of `now`.
///
/// `Enable` while the schedule is pending is rejected and the entity comes
/// back unchanged. Every other event is accepted.
pub fn apply_event<T: Schedulable>(
    mut entity: T,
    event: ScheduleEvent,
    now: DateTime<Utc>,
) -> EditOutcome<T, GuardError> {
    if let Err(reason) = PendingScheduleGuard.check(&event, entity.schedule_date(), now) {
        log_schedule!(
            debug,
            events::SCHEDULE_EVENT_REJECTED,
            subject: entity.subject(),
            event: event.event_type(),
            reason: reason,
        );
        return EditOutcome::Rejected {
            unchanged: entity,
            reason,
        };
    }

    match event {
        ScheduleEvent::Enable => entity.set_enabled(true),
        ScheduleEvent::Disable => entity.set_enabled(false),
        ScheduleEvent::Reschedule(date) => entity.set_schedule_date(Some(date)),
        ScheduleEvent::ClearSchedule => entity.set_schedule_date(None),
    }

    log_schedule!(
        debug,
        events::SCHEDULE_EVENT_APPLIED,
        subject: entity.subject(),
        event: event.event_type(),
        effective_enabled: entity.effective_enabled(now),
    );
    EditOutcome::Applied(entity)
}

/// Schedule evaluation bound to an injected clock
#[derive(Debug, Clone, Default)]
pub struct SchedulingGate<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> SchedulingGate<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn effective_enabled<T: Schedulable + ?Sized>(&self, entity: &T) -> bool {
        entity.effective_enabled(self.now())
    }

    pub fn editable<T: Schedulable + ?Sized>(&self, entity: &T) -> bool {
        entity.is_editable(self.now())
    }

    pub fn snapshot<T: Schedulable + ?Sized>(&self, entity: &T) -> ScheduleSnapshot {
        entity.snapshot(self.now())
    }

    pub fn apply<T: Schedulable>(
        &self,
        entity: T,
        event: ScheduleEvent,
    ) -> EditOutcome<T, GuardError> {
        apply_event(entity, event, self.now())
    }

    /// Entities that are visible right now, in input order
    pub fn visible<'a, T, I>(&self, entities: I) -> Vec<&'a T>
    where
        T: Schedulable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let now = self.now();
        entities
            .into_iter()
            .filter(|entity| entity.effective_enabled(now))
            .collect()
    }
}
