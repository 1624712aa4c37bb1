//! The booking modal: service summary, date, slots and submit.

use leptos::prelude::*;

use crate::components::service_picker::ServicePicker;
use crate::components::slot_grid::SlotGrid;
use crate::util::time::{format_duration, format_slot_range};
use crate::widget::BookingWidget;

/// Modal dialog shown while the widget is open. The backdrop, the close
/// button and Escape all close it.
#[component]
pub fn BookingModal() -> impl IntoView {
    let widget = expect_context::<BookingWidget>();
    let state = widget.state;

    let is_open = move || state.with(|s| s.is_open());
    let service_name = move || state.with(|s| s.service_name());
    let price_label = move || state.with(|s| s.price_label());
    let duration_label = move || {
        state.with(|s| {
            s.service
                .as_ref()
                .map(|svc| format_duration(svc.duration_minutes))
        })
    };
    let chosen_label = move || {
        state.with(|s| {
            s.chosen
                .as_ref()
                .map(|c| format_slot_range(&c.start, &c.end))
        })
    };
    let submitting = move || state.with(|s| s.submitting);

    // Escape is handled on the dialog, so it takes focus as soon as it mounts.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(dialog) = dialog_ref.get() {
                if let Err(e) = dialog.focus() {
                    leptos::logging::warn!("failed to focus booking dialog: {e:?}");
                }
            }
        }
    });

    let on_backdrop = move |_| widget.close_booking();
    let on_close_click = move |_| widget.close_booking();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            widget.close_booking();
        }
    };

    view! {
        <Show when=is_open>
            <div class="booking-modal__backdrop" on:click=on_backdrop>
                <div
                    class="booking-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="booking-modal__header">
                        <h2 class="booking-modal__service">{service_name}</h2>
                        <button class="booking-modal__close" on:click=on_close_click title="Close" aria-label="Close">
                            "✕"
                        </button>
                    </div>
                    <div class="booking-modal__summary">
                        <span class="booking-modal__price">{price_label}</span>
                        {move || {
                            duration_label()
                                .map(|label| view! { <span class="booking-modal__duration">{label}</span> })
                        }}
                    </div>

                    <ServicePicker/>

                    <label class="booking-modal__field">
                        <span class="booking-modal__label">"Date"</span>
                        <input
                            class="booking-modal__date"
                            type="date"
                            prop:value=move || state.with(|s| s.date.clone())
                            on:change=move |ev| widget.change_date(event_target_value(&ev))
                        />
                    </label>

                    <SlotGrid/>

                    {move || {
                        chosen_label()
                            .map(|label| {
                                view! {
                                    <p class="booking-modal__chosen">
                                        "Selected: "
                                        <span>{label}</span>
                                    </p>
                                }
                            })
                    }}

                    <div class="booking-modal__actions">
                        <button class="btn booking-modal__cancel" on:click=on_close_click>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary booking-modal__submit"
                            disabled=submitting
                            on:click=move |_| widget.submit_booking()
                        >
                            {move || if submitting() { "Sending..." } else { "Book" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
