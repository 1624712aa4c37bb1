//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! The queue owns alert ids and their lifecycle (`visible -> leaving ->
//! removed`). Timers in the widget only call [`AlertQueue::begin_leave`] and
//! [`AlertQueue::remove`], so every transition is testable without a clock.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// How long an alert stays fully visible.
pub const ALERT_VISIBLE_MS: u64 = 5_000;
/// Fade-out before an alert is removed.
pub const ALERT_FADE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// BEM modifier used by the alert stack stylesheet.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Set once the fade-out has started.
    pub leaving: bool,
}

/// Stack of alerts in insertion order. Duplicates are allowed.
#[derive(Clone, Debug, Default)]
pub struct AlertQueue {
    next_id: u64,
    pub alerts: Vec<Alert>,
}

impl AlertQueue {
    /// Append an alert and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.push(Alert { id, message: message.into(), severity, leaving: false });
        id
    }

    /// Start the fade-out for `id`. Unknown ids are ignored.
    pub fn begin_leave(&mut self, id: u64) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.leaving = true;
        }
    }

    /// Drop `id` from the stack. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.alerts.retain(|a| a.id != id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
