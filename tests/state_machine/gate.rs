use crate::common::{days_from_now, reference_now, PageBuilder};
use chrono::Duration;
use curator_core::clock::FixedClock;
use curator_core::models::{ContentKind, Domain, ScheduledContent, ShelfConfig};
use curator_core::state_machine::{GuardError, Schedulable, ScheduleEvent, SchedulingGate};

/// Enabled shelf scheduled for tomorrow: hidden, and switching it off is
/// accepted without changing what visitors see.
#[test]
fn test_disable_while_pending_has_no_visible_effect() {
    let now = reference_now();
    let gate = SchedulingGate::new(FixedClock::new(now));
    let shelf = ShelfConfig::manual("s1", Domain::Content)
        .with_schedule(true, Some(now + Duration::days(1)));

    assert!(!gate.effective_enabled(&shelf));

    let outcome = gate.apply(shelf, ScheduleEvent::Disable);
    assert!(outcome.is_applied());
    let shelf = outcome.into_value();
    assert!(!shelf.enabled);
    assert!(!gate.effective_enabled(&shelf));
}

#[test]
fn test_enable_while_pending_is_rejected_then_allowed_after_date() {
    let mut clock = FixedClock::new(reference_now());
    let shelf = ShelfConfig::manual("s1", Domain::Content)
        .with_schedule(false, Some(days_from_now(1)));

    let outcome = SchedulingGate::new(clock).apply(shelf, ScheduleEvent::Enable);
    assert!(matches!(
        outcome.reason(),
        Some(GuardError::ScheduleLocked { .. })
    ));
    let shelf = outcome.into_value();
    assert!(!shelf.enabled);

    clock.set(days_from_now(2));
    let gate = SchedulingGate::new(clock);
    assert!(gate.editable(&shelf));
    let shelf = gate.apply(shelf, ScheduleEvent::Enable).into_value();
    assert!(gate.effective_enabled(&shelf));
}

#[test]
fn test_same_rule_for_every_entity_kind() {
    let now = reference_now();
    let gate = SchedulingGate::new(FixedClock::new(now));
    let tomorrow = days_from_now(1);

    let shelf = ShelfConfig::manual("s1", Domain::News).with_schedule(true, Some(tomorrow));
    let page = PageBuilder::new("home").scheduled_for(tomorrow).build();
    let live = ScheduledContent::new("l1", ContentKind::Live, "Final").scheduled_for(tomorrow);

    let entities: [&dyn Schedulable; 3] = [&shelf, &page, &live];
    for entity in entities {
        assert!(!gate.effective_enabled(entity), "{}", entity.subject());
        assert!(!gate.editable(entity), "{}", entity.subject());
    }
}

#[test]
fn test_visible_keeps_input_order() {
    let gate = SchedulingGate::new(FixedClock::new(reference_now()));
    let items = vec![
        ScheduledContent::new("v1", ContentKind::Video, "a").scheduled_for(days_from_now(-1)),
        ScheduledContent::new("v2", ContentKind::Video, "b").scheduled_for(days_from_now(1)),
        ScheduledContent::new("v3", ContentKind::Video, "c"),
    ];

    let visible = gate.visible(&items);
    let ids: Vec<&str> = visible.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["v1", "v3"]);
}
