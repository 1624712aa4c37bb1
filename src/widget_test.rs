#![cfg(not(feature = "csr"))]

use super::*;
use crate::config::ServiceOption;
use crate::net::types::{Slot, SlotStatus};
use crate::state::booking::{ModalState, SlotsView};

/// The owner must outlive the test body; dropping it disposes the signals.
fn widget() -> (Owner, BookingWidget) {
    let owner = Owner::new();
    owner.set();
    let widget = BookingWidget::new(WidgetConfig {
        pro_id: "42".to_owned(),
        csrf_token: "tok".to_owned(),
        slots_url: "/slots/".to_owned(),
        book_url: "/book/".to_owned(),
        services: vec![ServiceOption {
            name: "Massage".to_owned(),
            price: Some("45.5".to_owned()),
            duration: Some("60".to_owned()),
        }],
    });
    (owner, widget)
}

fn with_ready_slots(widget: BookingWidget) {
    widget.state.update(|s| {
        let seq = s.slots_seq;
        s.finish_slot_load(
            seq,
            Ok(vec![Slot {
                start: "2025-03-10T09:00:00Z".to_owned(),
                end: "2025-03-10T10:00:00Z".to_owned(),
                status: SlotStatus::Available,
            }]),
        );
    });
}

#[test]
fn open_booking_sets_today_and_starts_loading() {
    let (_owner, widget) = widget();
    widget.state.update(|s| s.set_date("1999-01-01".to_owned()));
    widget.open_booking(None);
    let state = widget.state.get_untracked();
    assert_eq!(state.modal, ModalState::Open);
    assert_eq!(state.date, today_iso());
    assert_eq!(state.slots, SlotsView::Loading);
    assert_eq!(state.service_name(), "Massage");
}

#[test]
fn change_date_to_empty_shows_prompt() {
    let (_owner, widget) = widget();
    widget.open_booking(None);
    widget.change_date(String::new());
    assert_eq!(widget.state.get_untracked().slots, SlotsView::Prompt);
}

#[test]
fn close_booking_clears_selection() {
    let (_owner, widget) = widget();
    widget.open_booking(None);
    with_ready_slots(widget);
    widget.select_slot(0);
    assert!(widget.state.get_untracked().chosen.is_some());
    widget.close_booking();
    let state = widget.state.get_untracked();
    assert_eq!(state.modal, ModalState::Closed);
    assert!(state.chosen.is_none());
    assert!(state.service.is_none());
}

#[test]
fn submit_without_slot_warns_and_stays_idle() {
    let (_owner, widget) = widget();
    widget.open_booking(None);
    widget.submit_booking();
    let state = widget.state.get_untracked();
    assert!(!state.submitting);
    let alerts = widget.alerts.get_untracked();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts.alerts[0].severity, Severity::Warning);
    assert_eq!(alerts.alerts[0].message, "Please select a time slot.");
}

#[test]
fn submit_with_slot_marks_in_flight() {
    let (_owner, widget) = widget();
    widget.open_booking(None);
    with_ready_slots(widget);
    widget.select_slot(0);
    widget.submit_booking();
    assert!(widget.state.get_untracked().submitting);
    // A second click is ignored rather than surfacing another alert.
    widget.submit_booking();
    assert!(widget.alerts.get_untracked().is_empty());
}

#[test]
fn on_service_change_ignores_missing_option() {
    let (_owner, widget) = widget();
    widget.open_booking(Some(Service::from_raw("Nails", Some("10"), None)));
    widget.on_service_change(None);
    widget.on_service_change(Some(9));
    assert_eq!(widget.state.get_untracked().service_name(), "Massage");
}

#[test]
fn show_alert_stacks_messages() {
    let (_owner, widget) = widget();
    widget.show_alert("saved", Severity::Success);
    widget.show_alert("saved", Severity::Success);
    assert_eq!(widget.alerts.get_untracked().len(), 2);
}

#[test]
fn widget_signals_stay_live_after_setup() {
    let (_owner, widget) = widget();
    assert!(widget.state.try_get_untracked().is_some());
    assert!(widget.alerts.try_get_untracked().is_some());
    assert_eq!(widget.with_config(|c| c.pro_id.clone()), "42");
}
