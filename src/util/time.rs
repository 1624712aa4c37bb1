//! Date and time formatting for the booking modal.
//!
//! Slot timestamps arrive as ISO-8601 strings. Django emits them with an
//! offset, but naive values are accepted too and read as wall-clock time.
//! Labels are rendered in the browser's local timezone (`chrono` reads it
//! through `js-sys` on wasm).

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Currency suffix appended to prices.
pub const CURRENCY_SUFFIX: &str = "DT";

/// Today's local calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn today_iso() -> String {
    iso_date(Local::now().date_naive())
}

#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM` label for one timestamp in `tz`, or `None` when unparsable.
pub fn format_clock<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).format("%H:%M").to_string());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.format("%H:%M").to_string())
}

/// `HH:MM - HH:MM` label for a slot in `tz`. Unparsable ends fall back to the
/// raw text so the control is never blank.
pub fn format_slot_range_in<Tz: TimeZone>(start: &str, end: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let from = format_clock(start, tz).unwrap_or_else(|| start.to_owned());
    let to = format_clock(end, tz).unwrap_or_else(|| end.to_owned());
    format!("{from} - {to}")
}

/// Slot label in the local timezone.
#[must_use]
pub fn format_slot_range(start: &str, end: &str) -> String {
    format_slot_range_in(start, end, &Local)
}

/// Price label, e.g. `45.5 DT` or `45 DT`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price} {CURRENCY_SUFFIX}")
}

/// Duration label, e.g. `60 min`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    format!("{minutes} min")
}
