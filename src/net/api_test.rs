use super::*;

#[test]
fn slots_url_appends_query() {
    assert_eq!(
        slots_url("/api/appointments/public/slots/", "42", "2025-03-10"),
        "/api/appointments/public/slots/?pro_id=42&date=2025-03-10"
    );
}

#[test]
fn slots_url_extends_existing_query() {
    assert_eq!(
        slots_url("/slots/?lang=fr", "42", "2025-03-10"),
        "/slots/?lang=fr&pro_id=42&date=2025-03-10"
    );
}

#[test]
fn slots_url_encodes_values() {
    assert_eq!(slots_url("/slots/", "4 2", "a&b"), "/slots/?pro_id=4+2&date=a%26b");
}

#[test]
fn csrf_header_name_matches_django() {
    assert_eq!(CSRF_HEADER, "X-CSRFToken");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_fetch_slots_reports_network_error() {
    let config = WidgetConfig {
        pro_id: "1".to_owned(),
        csrf_token: "t".to_owned(),
        slots_url: "/slots/".to_owned(),
        book_url: "/book/".to_owned(),
        services: Vec::new(),
    };
    let result = block_on_ready(fetch_slots(&config, "2025-03-10"));
    assert!(matches!(result, Err(BookingError::Network(_))));
}

/// Drive a future that completes without suspending.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended in a native test"),
    }
}
