//! Wire DTOs for the slots and booking endpoints.
//!
//! DESIGN
//! ======
//! Timestamps stay as the exact strings the server sent. They are only parsed
//! for display, so a booking echoes back precisely the slot it was offered.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Availability of a slot as reported by the slots endpoint.
///
/// The server marks taken slots `pending` or `confirmed`; anything it may add
/// later is treated as unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Pending,
    Confirmed,
    #[default]
    #[serde(other)]
    Unavailable,
}

impl SlotStatus {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Hover title for a disabled slot.
    #[must_use]
    pub fn unavailable_reason(self) -> Option<&'static str> {
        match self {
            Self::Available => None,
            Self::Pending => Some("Pending"),
            Self::Confirmed => Some("Booked"),
            Self::Unavailable => Some("Unavailable"),
        }
    }
}

/// A bookable interval returned by the slots endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// ISO-8601 start timestamp, verbatim from the server.
    pub start: String,
    /// ISO-8601 end timestamp, verbatim from the server.
    pub end: String,
    #[serde(default)]
    pub status: SlotStatus,
}

impl Slot {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// Body of `GET {slots_url}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SlotsResponse {
    /// Missing or malformed `results` decodes as an empty list.
    #[serde(default, deserialize_with = "deserialize_lenient_slots")]
    pub results: Vec<Slot>,
}

fn deserialize_lenient_slots<'de, D>(deserializer: D) -> Result<Vec<Slot>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Body of `POST {book_url}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub pro_id: i64,
    pub service_name: String,
    pub price: f64,
    pub start: String,
    pub end: String,
}

/// Optional error body returned with a non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `detail` from a raw response body, if any.
    #[must_use]
    pub fn detail_from(raw: &str) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(raw).unwrap_or_default();
        body.detail
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty())
    }
}
