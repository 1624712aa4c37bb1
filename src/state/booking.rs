//! Booking modal state: current service, date, slots and chosen slot.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on [`BookingState`] so the flow can be
//! unit-tested without a browser. The widget handle wraps this struct in an
//! `RwSignal`, performs the I/O each transition asks for, and feeds results
//! back in.
//!
//! Slot fetches are sequenced: each load takes a new `slots_seq`, and a
//! response carrying an older number is dropped. Closing the modal advances
//! the sequence too, so a late response never repaints a closed modal.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::config::ServiceOption;
use crate::error::BookingError;
use crate::net::types::{BookingRequest, Slot};
use crate::state::alerts::Severity;
use crate::util::time::format_price;

/// Name used when no service has been picked.
pub const DEFAULT_SERVICE_NAME: &str = "Service";
/// Duration used when a service carries no usable duration.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

pub const BOOKING_SENT_MESSAGE: &str =
    "Your appointment request has been sent. You will receive an email once it is confirmed.";

/// The offering being booked.
#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl Service {
    /// Stand-in shown when the modal opens without a specific service.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_owned(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            price: 0.0,
        }
    }

    /// Build a service from raw host text, defaulting bad numbers.
    #[must_use]
    pub fn from_raw(name: &str, price: Option<&str>, duration: Option<&str>) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() { DEFAULT_SERVICE_NAME.to_owned() } else { name.to_owned() },
            duration_minutes: parse_duration(duration),
            price: parse_price(price),
        }
    }

    #[must_use]
    pub fn from_option(option: &ServiceOption) -> Self {
        Self::from_raw(&option.name, option.price.as_deref(), option.duration.as_deref())
    }
}

/// Leading `digits[sep digits]` of `raw`. Host pages may render decimals
/// with a comma (`45,50`) and append units (`45 DT`, `90 min`).
fn decimal_prefix(raw: &str) -> String {
    let mut seen_separator = false;
    raw.trim_start()
        .chars()
        .take_while(|&c| {
            if c.is_ascii_digit() {
                return true;
            }
            if matches!(c, '.' | ',') && !seen_separator {
                seen_separator = true;
                return true;
            }
            false
        })
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let price = decimal_prefix(raw).parse::<f64>().unwrap_or(0.0);
    if price.is_finite() && price >= 0.0 { price } else { 0.0 }
}

fn parse_duration(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_DURATION_MINUTES;
    };
    let digits: String = raw.trim_start().chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u32>().unwrap_or(DEFAULT_DURATION_MINUTES)
}

/// Whether the booking modal is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// The slot picked for booking. `index` is the slot's position in the
/// rendered list and stands in for the control's handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChosenSlot {
    pub start: String,
    pub end: String,
    pub index: usize,
}

/// What the slot area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SlotsView {
    /// No date selected yet.
    #[default]
    Prompt,
    Loading,
    /// The server returned no slots for the date.
    Empty,
    /// The fetch failed; the user can retry by re-selecting the date.
    Failed,
    Ready(Vec<Slot>),
}

impl SlotsView {
    /// Placeholder text for every state except `Ready`.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Prompt => Some("Please select a date."),
            Self::Loading => Some("Loading time slots..."),
            Self::Empty => Some("No time slots available for this date."),
            Self::Failed => Some("Error while loading time slots."),
            Self::Ready(_) => None,
        }
    }
}

/// A slot fetch the caller should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotsRequest {
    pub seq: u64,
    pub date: String,
}

/// State of one booking widget.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub modal: ModalState,
    pub service: Option<Service>,
    /// Index of the active dropdown option.
    pub selected_option: Option<usize>,
    /// Selected calendar date, `YYYY-MM-DD`, or empty.
    pub date: String,
    pub slots: SlotsView,
    pub chosen: Option<ChosenSlot>,
    pub slots_seq: u64,
    /// Set while a booking request is in flight.
    pub submitting: bool,
}

impl BookingState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Show the modal for `service`, reset the date to `today`, and sync the
    /// dropdown. The caller follows up with [`BookingState::begin_slot_load`].
    pub fn open(&mut self, service: Option<Service>, catalog: &[ServiceOption], today: String) {
        let requested_name = service.as_ref().map(|s| s.name.clone());
        self.service = Some(service.unwrap_or_else(Service::placeholder));
        self.modal = ModalState::Open;
        self.date = today;
        self.sync_service_option(requested_name.as_deref(), catalog);
    }

    /// Hide the modal and drop the service and chosen slot.
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.service = None;
        self.selected_option = None;
        self.chosen = None;
        self.slots_seq += 1;
    }

    /// Point the dropdown at the option named `name`, or at the first option.
    pub fn sync_service_option(&mut self, name: Option<&str>, catalog: &[ServiceOption]) {
        let matched = name.and_then(|n| catalog.iter().position(|opt| opt.name == n));
        if let Some(index) = matched.or(if catalog.is_empty() { None } else { Some(0) }) {
            self.select_service_option(index, catalog);
        }
    }

    /// Make the dropdown option at `index` the current service. Returns
    /// `false` and changes nothing when no such option exists.
    pub fn select_service_option(&mut self, index: usize, catalog: &[ServiceOption]) -> bool {
        let Some(option) = catalog.get(index) else {
            return false;
        };
        self.selected_option = Some(index);
        self.service = Some(Service::from_option(option));
        true
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    /// Start a slot load for the selected date.
    ///
    /// Returns the request to perform, or `None` when no date is selected
    /// (the prompt is shown instead).
    pub fn begin_slot_load(&mut self) -> Option<SlotsRequest> {
        self.slots_seq += 1;
        let date = self.date.trim();
        if date.is_empty() {
            self.slots = SlotsView::Prompt;
            return None;
        }
        self.slots = SlotsView::Loading;
        Some(SlotsRequest { seq: self.slots_seq, date: date.to_owned() })
    }

    /// Apply a slot response. Returns `false` if the response was superseded.
    pub fn finish_slot_load(&mut self, seq: u64, result: Result<Vec<Slot>, BookingError>) -> bool {
        if seq != self.slots_seq {
            return false;
        }
        self.slots = match result {
            Ok(slots) if slots.is_empty() => SlotsView::Empty,
            Ok(slots) => SlotsView::Ready(slots),
            Err(_) => SlotsView::Failed,
        };
        true
    }

    /// Choose the rendered slot at `index`. Unavailable or unknown slots are
    /// ignored and leave the current choice untouched.
    pub fn select_slot(&mut self, index: usize) -> bool {
        let SlotsView::Ready(slots) = &self.slots else {
            return false;
        };
        let Some(slot) = slots.get(index).filter(|s| s.is_available()) else {
            return false;
        };
        self.chosen = Some(ChosenSlot { start: slot.start.clone(), end: slot.end.clone(), index });
        true
    }

    /// Whether the rendered slot at `index` is the chosen one.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        let (Some(chosen), SlotsView::Ready(slots)) = (&self.chosen, &self.slots) else {
            return false;
        };
        chosen.index == index
            && slots
                .get(index)
                .is_some_and(|s| s.start == chosen.start && s.end == chosen.end)
    }

    #[must_use]
    pub fn service_name(&self) -> String {
        self.service
            .as_ref()
            .map_or_else(|| DEFAULT_SERVICE_NAME.to_owned(), |s| s.name.clone())
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        format_price(self.service.as_ref().map_or(0.0, |s| s.price))
    }

    /// Validate and build the booking body, marking a submission in flight.
    ///
    /// # Errors
    ///
    /// `SubmitInFlight` while a previous submission is pending, and
    /// `NoSlotSelected` when no slot is chosen. Neither changes state.
    pub fn begin_submit(&mut self, pro_id: i64) -> Result<BookingRequest, BookingError> {
        if self.submitting {
            return Err(BookingError::SubmitInFlight);
        }
        let Some(chosen) = &self.chosen else {
            return Err(BookingError::NoSlotSelected);
        };
        let request = BookingRequest {
            pro_id,
            service_name: self.service_name(),
            price: self.service.as_ref().map_or(0.0, |s| s.price),
            start: chosen.start.clone(),
            end: chosen.end.clone(),
        };
        self.submitting = true;
        Ok(request)
    }

    /// Record the outcome of a submission and return the alert to show.
    ///
    /// Success closes the modal. Failure keeps the modal and the chosen slot
    /// so the user can retry.
    pub fn finish_submit(&mut self, result: Result<(), BookingError>) -> (String, Severity) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.close();
                (BOOKING_SENT_MESSAGE.to_owned(), Severity::Success)
            }
            Err(e) => (e.user_message(), Severity::Error),
        }
    }
}
