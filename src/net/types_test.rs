use super::*;
use serde_json::json;

// =============================================================
// SlotStatus
// =============================================================

#[test]
fn slot_status_parses_known_values() {
    let parsed: Vec<SlotStatus> = serde_json::from_value(json!(["available", "pending", "confirmed"])).unwrap();
    assert_eq!(parsed, vec![SlotStatus::Available, SlotStatus::Pending, SlotStatus::Confirmed]);
}

#[test]
fn slot_status_unknown_value_is_unavailable() {
    let status: SlotStatus = serde_json::from_value(json!("blocked")).unwrap();
    assert_eq!(status, SlotStatus::Unavailable);
    assert!(!status.is_available());
}

#[test]
fn slot_status_reasons() {
    assert_eq!(SlotStatus::Available.unavailable_reason(), None);
    assert_eq!(SlotStatus::Pending.unavailable_reason(), Some("Pending"));
    assert_eq!(SlotStatus::Confirmed.unavailable_reason(), Some("Booked"));
}

// =============================================================
// SlotsResponse
// =============================================================

#[test]
fn slots_response_parses_results() {
    let body = json!({
        "results": [
            { "start": "2025-03-10T09:00:00+01:00", "end": "2025-03-10T10:00:00+01:00", "status": "available" },
            { "start": "2025-03-10T10:00:00+01:00", "end": "2025-03-10T11:00:00+01:00", "status": "confirmed" }
        ]
    });
    let resp: SlotsResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.results.len(), 2);
    assert!(resp.results[0].is_available());
    assert!(!resp.results[1].is_available());
    assert_eq!(resp.results[0].start, "2025-03-10T09:00:00+01:00");
}

#[test]
fn slots_response_missing_results_is_empty() {
    let resp: SlotsResponse = serde_json::from_value(json!({ "detail": "pro_id requis" })).unwrap();
    assert!(resp.results.is_empty());
}

#[test]
fn slots_response_malformed_results_is_empty() {
    let resp: SlotsResponse = serde_json::from_value(json!({ "results": "nope" })).unwrap();
    assert!(resp.results.is_empty());
    let resp: SlotsResponse = serde_json::from_value(json!({ "results": null })).unwrap();
    assert!(resp.results.is_empty());
}

#[test]
fn slot_without_status_is_unavailable() {
    let slot: Slot = serde_json::from_value(json!({ "start": "a", "end": "b" })).unwrap();
    assert_eq!(slot.status, SlotStatus::Unavailable);
}

// =============================================================
// BookingRequest
// =============================================================

#[test]
fn booking_request_serializes_wire_shape() {
    let req = BookingRequest {
        pro_id: 7,
        service_name: "Massage".to_owned(),
        price: 45.5,
        start: "2025-03-10T09:00:00+01:00".to_owned(),
        end: "2025-03-10T10:00:00+01:00".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({
            "pro_id": 7,
            "service_name": "Massage",
            "price": 45.5,
            "start": "2025-03-10T09:00:00+01:00",
            "end": "2025-03-10T10:00:00+01:00"
        })
    );
    assert!(value["pro_id"].is_i64());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_extracts_detail() {
    assert_eq!(ErrorBody::detail_from(r#"{"detail":"Slot taken"}"#), Some("Slot taken".to_owned()));
}

#[test]
fn error_body_without_detail_is_none() {
    assert_eq!(ErrorBody::detail_from(r#"{"error":"x"}"#), None);
    assert_eq!(ErrorBody::detail_from(r#"{"detail":"   "}"#), None);
}

#[test]
fn error_body_unparsable_is_none() {
    assert_eq!(ErrorBody::detail_from("<html>502</html>"), None);
    assert_eq!(ErrorBody::detail_from(""), None);
}
