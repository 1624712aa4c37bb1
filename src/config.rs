//! Typed widget configuration read from the host page.
//!
//! The host renders a `#booking-data` element whose `data-*` attributes carry
//! the professional id, anti-forgery token and endpoint URLs. Parsing is kept
//! independent of the DOM: callers hand in an attribute lookup, so the same
//! validation runs in the browser and in unit tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer};

use crate::error::BookingError;

/// Id of the host element carrying the widget configuration.
pub const HOST_DATA_ELEMENT_ID: &str = "booking-data";

pub const ATTR_PRO_ID: &str = "data-pro-id";
pub const ATTR_CSRF_TOKEN: &str = "data-csrf-token";
pub const ATTR_SLOTS_URL: &str = "data-slots-url";
pub const ATTR_BOOK_URL: &str = "data-book-url";
pub const ATTR_SERVICES: &str = "data-services";

/// One entry of the service dropdown.
///
/// `price` and `duration` keep the host's raw text; the defaults for bad
/// values are applied when the option becomes the current service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceOption {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_raw_scalar")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_raw_scalar")]
    pub duration: Option<String>,
}

/// Accept a JSON string or number and keep its text form.
fn deserialize_raw_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Immutable configuration for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Professional id, kept as text for the slots query string.
    pub pro_id: String,
    pub csrf_token: String,
    pub slots_url: String,
    pub book_url: String,
    pub services: Vec<ServiceOption>,
}

impl WidgetConfig {
    /// Build a config from the host data element's attributes.
    ///
    /// `lookup` returns `None` when the data element itself is missing, and
    /// `Some(attrs)` otherwise, where `attrs(name)` reads one attribute.
    ///
    /// # Errors
    ///
    /// `ConfigMissing` when the element is absent, `ConfigInvalid` when a
    /// required attribute is empty or the professional id is not an integer.
    pub fn from_lookup<F>(lookup: Option<F>) -> Result<Self, BookingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let attrs = lookup.ok_or(BookingError::ConfigMissing)?;

        let pro_id = required(&attrs, ATTR_PRO_ID)?;
        if pro_id.parse::<i64>().is_err() {
            return Err(BookingError::ConfigInvalid {
                field: ATTR_PRO_ID,
                reason: format!("not an integer: {pro_id}"),
            });
        }
        let csrf_token = required(&attrs, ATTR_CSRF_TOKEN)?;
        let slots_url = required(&attrs, ATTR_SLOTS_URL)?;
        let book_url = required(&attrs, ATTR_BOOK_URL)?;
        let services = attrs(ATTR_SERVICES)
            .map(|raw| parse_services(&raw))
            .unwrap_or_default();

        Ok(Self { pro_id, csrf_token, slots_url, book_url, services })
    }

    /// Professional id as sent in the booking body.
    #[must_use]
    pub fn pro_id_number(&self) -> i64 {
        self.pro_id.parse().unwrap_or_default()
    }

    /// Read the configuration from `#booking-data` on the current page.
    ///
    /// # Errors
    ///
    /// See [`WidgetConfig::from_lookup`].
    #[cfg(feature = "csr")]
    pub fn load_from_host() -> Result<Self, BookingError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(HOST_DATA_ELEMENT_ID));
        Self::from_lookup(element.map(|el| move |name: &str| el.get_attribute(name)))
    }
}

fn required<F>(attrs: &F, field: &'static str) -> Result<String, BookingError>
where
    F: Fn(&str) -> Option<String>,
{
    match attrs(field).map(|v| v.trim().to_owned()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BookingError::ConfigInvalid { field, reason: "missing or empty".to_owned() }),
    }
}

/// Parse the optional service catalog. A malformed catalog only empties the
/// dropdown; it does not disable the widget.
fn parse_services(raw: &str) -> Vec<ServiceOption> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<ServiceOption>>(raw) {
        Ok(services) => services,
        Err(e) => {
            leptos::logging::warn!("ignoring malformed {ATTR_SERVICES}: {e}");
            Vec::new()
        }
    }
}
