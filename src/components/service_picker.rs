//! Service dropdown fed by the host's service catalog.

use leptos::prelude::*;

use crate::widget::BookingWidget;

/// `<select>` over the configured services. Option values are catalog
/// indices, so services sharing a name stay distinct. Hidden when the host
/// provides no catalog.
#[component]
pub fn ServicePicker() -> impl IntoView {
    let widget = expect_context::<BookingWidget>();
    let services = widget.with_config(|c| c.services.clone());
    if services.is_empty() {
        return ().into_any();
    }

    view! {
        <label class="booking-modal__field">
            <span class="booking-modal__label">"Service"</span>
            <select
                class="booking-modal__select"
                on:change=move |ev| widget.on_service_change(event_target_value(&ev).parse().ok())
            >
                {services
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let selected = move || widget.state.with(|s| s.selected_option == Some(index));
                        view! {
                            <option value=index.to_string() prop:selected=selected>
                                {option.name.clone()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
    .into_any()
}
