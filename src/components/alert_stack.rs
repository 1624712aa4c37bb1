//! Toast notifications pinned to the top-right corner.

use leptos::prelude::*;

use crate::widget::BookingWidget;

/// Renders the widget's alert queue. Fading alerts get the `--leaving`
/// modifier so the stylesheet can animate them out.
#[component]
pub fn AlertStack() -> impl IntoView {
    let widget = expect_context::<BookingWidget>();
    let alerts = widget.alerts;

    view! {
        <div class="booking-alerts" aria-live="polite">
            {move || {
                alerts
                    .get()
                    .alerts
                    .into_iter()
                    .map(|alert| {
                        let class = format!("booking-alert booking-alert--{}", alert.severity.css_modifier());
                        view! {
                            <div class=class class:booking-alert--leaving=alert.leaving role="status">
                                {alert.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
