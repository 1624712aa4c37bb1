//! HTTP calls to the slots and booking endpoints.
//!
//! Client-side (csr): real requests via `gloo-net`, always with
//! `credentials: include` so the host page's session cookie is sent.
//! Native builds: stubs returning an error, since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and body-decoding failures map to `BookingError::Network`;
//! non-2xx responses map to `BookingError::Server` with the `detail` field of
//! the body when one is present. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::WidgetConfig;
use crate::error::BookingError;
use crate::net::types::{BookingRequest, Slot};
#[cfg(feature = "csr")]
use crate::net::types::{ErrorBody, SlotsResponse};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `{endpoint}?pro_id={id}&date={date}`, appending with `&` when the endpoint
/// already has a query string.
#[must_use]
pub fn slots_url(endpoint: &str, pro_id: &str, date: &str) -> String {
    let query = serde_urlencoded::to_string([("pro_id", pro_id), ("date", date)])
        .unwrap_or_else(|_| format!("pro_id={pro_id}&date={date}"));
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{query}")
}

#[cfg(feature = "csr")]
fn network_error(e: gloo_net::Error) -> BookingError {
    BookingError::Network(e.to_string())
}

/// Fetch the slots for `date` from the configured slots endpoint.
///
/// # Errors
///
/// `Network` when the request or JSON decoding fails, `Server` on a non-2xx
/// status.
pub async fn fetch_slots(config: &WidgetConfig, date: &str) -> Result<Vec<Slot>, BookingError> {
    #[cfg(feature = "csr")]
    {
        let url = slots_url(&config.slots_url, &config.pro_id, date);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BookingError::Server { status: resp.status(), detail: ErrorBody::detail_from(&body) });
        }
        let body: SlotsResponse = resp.json().await.map_err(network_error)?;
        Ok(body.results)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, date);
        Err(BookingError::Network("not available outside the browser".to_owned()))
    }
}

/// POST a booking request to the configured booking endpoint.
///
/// # Errors
///
/// `Network` when the request never completes, `Server` on a non-2xx status
/// (with the body's `detail`, if any).
pub async fn create_booking(config: &WidgetConfig, request: &BookingRequest) -> Result<(), BookingError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.book_url)
            .header(CSRF_HEADER, &config.csrf_token)
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if resp.ok() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(BookingError::Server { status: resp.status(), detail: ErrorBody::detail_from(&body) })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(BookingError::Network("not available outside the browser".to_owned()))
    }
}
