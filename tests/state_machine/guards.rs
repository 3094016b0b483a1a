use crate::common::{days_from_now, reference_now};
use curator_core::state_machine::guards::*;
use curator_core::state_machine::{GuardError, ScheduleEvent, ScheduleState};

#[test]
fn test_guard_description() {
    assert_eq!(
        PendingScheduleGuard.description(),
        "Enabling must wait until the schedule date has passed"
    );
}

#[test]
fn test_effective_enabled_matches_documented_table() {
    let now = reference_now();
    assert!(!effective_enabled(true, Some(days_from_now(1)), now));
    assert!(effective_enabled(true, Some(days_from_now(-1)), now));
    assert!(!effective_enabled(false, None, now));
    assert!(effective_enabled(true, None, now));
}

#[test]
fn test_editable_matches_documented_table() {
    let now = reference_now();
    assert!(!editable(Some(days_from_now(1)), now));
    assert!(editable(Some(days_from_now(-1)), now));
    assert!(editable(None, now));
}

#[test]
fn test_guard_agrees_with_state_classification() {
    let now = reference_now();
    for date in [None, Some(days_from_now(-2)), Some(days_from_now(3))] {
        let state = ScheduleState::classify(true, date, now);
        let allowed = PendingScheduleGuard
            .check(&ScheduleEvent::Enable, date, now)
            .is_ok();
        assert_eq!(allowed, state.is_editable(), "schedule {date:?}");
    }
}

#[test]
fn test_locked_error_names_the_date() {
    let now = reference_now();
    let date = days_from_now(1);
    let err = PendingScheduleGuard
        .check(&ScheduleEvent::Enable, Some(date), now)
        .unwrap_err();

    assert_eq!(err, GuardError::ScheduleLocked { schedule_date: date });
    assert!(err.to_string().contains("2024-09-15"));
}
