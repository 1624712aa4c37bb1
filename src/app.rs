//! Composition root: builds the widget, mounts its view, wires the host page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::{alert_stack::AlertStack, booking_modal::BookingModal};
use crate::config::WidgetConfig;
use crate::error::BookingError;
use crate::util::host::auto_open_requested;
use crate::widget::BookingWidget;

/// Root component. Provides the widget handle to every child.
#[component]
pub fn BookingApp(widget: BookingWidget) -> impl IntoView {
    provide_context(widget);

    view! {
        <div class="booking-widget">
            <BookingModal/>
            <AlertStack/>
        </div>
    }
}

/// Build the widget from a loaded config, or log why it stays inert.
///
/// `search` is the page's query string; `book=1` opens the modal at once.
pub fn initialize_with(config: Result<WidgetConfig, BookingError>, search: &str) -> Option<BookingWidget> {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("booking widget disabled: {e}");
            return None;
        }
    };
    let widget = BookingWidget::new(config);
    if auto_open_requested(search) {
        widget.open_booking(None);
    }
    Some(widget)
}

/// Read the host page, mount the widget and bind the host's trigger
/// buttons. Does nothing beyond logging when `#booking-data` is absent.
#[cfg(feature = "csr")]
pub fn initialize() -> Option<BookingWidget> {
    use crate::util::{clipboard, host};

    let copy_buttons = clipboard::bind_copy_buttons();
    let widget = initialize_with(WidgetConfig::load_from_host(), &host::current_search())?;

    let Some(target) = host::mount_target() else {
        leptos::logging::error!("booking widget disabled: no mount target");
        return None;
    };
    leptos::mount::mount_to(target, move || view! { <BookingApp widget/> }).forget();

    let triggers = host::bind_booking_triggers(move |service| widget.open_booking(Some(service)));
    let closers = host::bind_close_triggers(move || widget.close_booking());
    leptos::logging::log!(
        "booking widget ready: {triggers} booking triggers, {closers} close triggers, {copy_buttons} copy buttons"
    );
    Some(widget)
}
