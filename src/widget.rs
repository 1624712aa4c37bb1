//! The booking widget handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BookingWidget` is constructed once by the composition root (`app`) and
//! provided through Leptos context. It owns the config and the two state
//! signals, and is the only place that performs I/O: it asks
//! [`BookingState`] for the next transition, runs the request on the UI task
//! queue, and feeds the result back.
//!
//! The handle is `Copy`; every method takes `self` so event handlers can
//! capture it freely.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::error::BookingError;
use crate::state::alerts::{AlertQueue, Severity};
use crate::state::booking::{BookingState, Service};
use crate::util::time::today_iso;

#[derive(Clone, Copy)]
pub struct BookingWidget {
    config: StoredValue<WidgetConfig>,
    pub state: RwSignal<BookingState>,
    pub alerts: RwSignal<AlertQueue>,
}

impl BookingWidget {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            state: RwSignal::new(BookingState::default()),
            alerts: RwSignal::new(AlertQueue::default()),
        }
    }

    /// Run `f` against the immutable configuration.
    pub fn with_config<T>(self, f: impl FnOnce(&WidgetConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Open the modal for `service` (or the placeholder) and load today's slots.
    pub fn open_booking(self, service: Option<Service>) {
        let catalog = self.with_config(|c| c.services.clone());
        self.state.update(|s| s.open(service, &catalog, today_iso()));
        self.load_slots();
    }

    pub fn close_booking(self) {
        self.state.update(BookingState::close);
    }

    /// Date control changed: store the new date and reload.
    pub fn change_date(self, date: String) {
        self.state.update(|s| s.set_date(date));
        self.load_slots();
    }

    /// Fetch slots for the selected date. Failures end in the error message;
    /// the user retries by picking the date again.
    pub fn load_slots(self) {
        let Some(request) = self.state.try_update(BookingState::begin_slot_load).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            let state = self.state;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_slots(&config, &request.date).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("loading slots for {} failed: {e}", request.date);
                }
                let applied = state.try_update(|s| s.finish_slot_load(request.seq, result));
                if applied == Some(false) {
                    leptos::logging::log!("dropped superseded slots response for {}", request.date);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("slot fetch for {} needs the browser runtime", request.date);
        }
    }

    /// A rendered slot was clicked.
    pub fn select_slot(self, index: usize) {
        self.state.update(|s| {
            s.select_slot(index);
        });
    }

    /// The service dropdown changed to option `index`. No-op when the option
    /// is missing.
    pub fn on_service_change(self, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        let catalog = self.with_config(|c| c.services.clone());
        self.state.update(|s| {
            s.select_service_option(index, &catalog);
        });
    }

    /// Submit the chosen slot. Without a chosen slot only a warning is shown.
    pub fn submit_booking(self) {
        let pro_id = self.with_config(WidgetConfig::pro_id_number);
        let Some(outcome) = self.state.try_update(|s| s.begin_submit(pro_id)) else {
            return;
        };
        let request = match outcome {
            Ok(request) => request,
            Err(BookingError::SubmitInFlight) => {
                leptos::logging::log!("ignoring submit while a booking is in flight");
                return;
            }
            Err(e) => {
                self.show_alert(e.user_message(), Severity::Warning);
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_booking(&config, &request).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("booking request failed: {e}");
                }
                if let Some((message, severity)) = self.state.try_update(|s| s.finish_submit(result)) {
                    self.show_alert(message, severity);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("booking for {} needs the browser runtime", request.start);
        }
    }

    /// Show a transient notification. It stays for `ALERT_VISIBLE_MS`, fades
    /// for `ALERT_FADE_MS`, then is removed.
    pub fn show_alert(self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let Some(id) = self.alerts.try_update(|q| q.push(message, severity)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            use crate::state::alerts::{ALERT_FADE_MS, ALERT_VISIBLE_MS};
            use std::time::Duration;

            let alerts = self.alerts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(ALERT_VISIBLE_MS)).await;
                alerts.update(|q| q.begin_leave(id));
                gloo_timers::future::sleep(Duration::from_millis(ALERT_FADE_MS)).await;
                alerts.update(|q| q.remove(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("alert {id} stays queued without browser timers");
        }
    }
}
