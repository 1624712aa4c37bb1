//! Error taxonomy for the booking widget.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is handled where it happens and turned into a transient
//! user-facing message. Only configuration errors are terminal, and they only
//! leave the widget inert; the host page keeps working.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Generic text shown when a booking fails without a server-provided reason.
pub const BOOKING_FAILED_FALLBACK: &str = "Unable to book";

/// Errors raised while configuring, loading slots, booking, or copying.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The host page has no `#booking-data` element.
    #[error("booking data element not found")]
    ConfigMissing,

    /// The host data element exists but an attribute is empty or malformed.
    #[error("invalid booking config: {field}: {reason}")]
    ConfigInvalid { field: &'static str, reason: String },

    /// Submit was attempted without a chosen slot.
    #[error("no time slot selected")]
    NoSlotSelected,

    /// A booking request is already in flight.
    #[error("booking already in progress")]
    SubmitInFlight,

    /// The request never completed or its body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server { status: u16, detail: Option<String> },

    /// Writing to the system clipboard failed.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl BookingError {
    /// Text shown to the user when a booking attempt fails with this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoSlotSelected => "Please select a time slot.".to_owned(),
            Self::Server { detail: Some(detail), .. } => format!("Error: {detail}"),
            _ => format!("Error: {BOOKING_FAILED_FALLBACK}"),
        }
    }
}
