use crate::common::{days_from_now, reference_now};
use curator_core::models::{ContentKind, ScheduledContent};
use curator_core::state_machine::{apply_event, Schedulable, ScheduleEvent, ScheduleState};

#[test]
fn test_reschedule_into_future_locks_enabled_entity() {
    let now = reference_now();
    let news = ScheduledContent::new("n1", ContentKind::News, "Match report");
    assert_eq!(news.snapshot(now).state, ScheduleState::ManualOn);

    let news = apply_event(news, ScheduleEvent::Reschedule(days_from_now(2)), now).into_value();
    let snapshot = news.snapshot(now);
    assert_eq!(snapshot.state, ScheduleState::ScheduledPending);
    assert!(snapshot.enabled);
    assert!(!snapshot.effective_enabled);
}

#[test]
fn test_events_apply_in_sequence() {
    let now = reference_now();
    let video = ScheduledContent::new("v1", ContentKind::Video, "Highlights");

    let events = [
        ScheduleEvent::Disable,
        ScheduleEvent::Reschedule(days_from_now(-1)),
        ScheduleEvent::Enable,
    ];
    let video = events
        .into_iter()
        .fold(video, |video, event| apply_event(video, event, now).into_value());

    assert_eq!(video.snapshot(now).state, ScheduleState::ScheduledElapsed);
    assert!(video.effective_enabled(now));
}

#[test]
fn test_event_json_from_admin_form() {
    let event: ScheduleEvent =
        serde_json::from_str(r#"{"type":"Disable"}"#).expect("valid event");
    assert_eq!(event, ScheduleEvent::Disable);
    assert_eq!(event.event_type(), "disable");
}
