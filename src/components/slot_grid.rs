//! Slot buttons for the selected date.

use leptos::prelude::*;

use crate::state::booking::SlotsView;
use crate::util::time::format_slot_range;
use crate::widget::BookingWidget;

/// One button per slot, or the placeholder message while there is nothing
/// to pick. Unavailable slots render disabled with no click handler.
#[component]
pub fn SlotGrid() -> impl IntoView {
    let widget = expect_context::<BookingWidget>();
    let state = widget.state;
    let slots = Memo::new(move |_| state.with(|s| s.slots.clone()));

    view! {
        <div class="booking-slots">
            {move || {
                let current = slots.get();
                if let Some(message) = current.message() {
                    let failed = matches!(current, SlotsView::Failed);
                    return view! {
                        <div class="booking-slots__message" class:booking-slots__message--error=failed>
                            {message}
                        </div>
                    }
                        .into_any();
                }
                let SlotsView::Ready(items) = current else {
                    return ().into_any();
                };
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, slot)| {
                        let label = format_slot_range(&slot.start, &slot.end);
                        if let Some(reason) = slot.status.unavailable_reason() {
                            return view! {
                                <button class="booking-slot booking-slot--disabled" disabled=true title=reason>
                                    {label}
                                </button>
                            }
                                .into_any();
                        }
                        let selected = move || state.with(|s| s.is_highlighted(index));
                        view! {
                            <button
                                class="booking-slot"
                                class:booking-slot--selected=selected
                                on:click=move |_| widget.select_slot(index)
                            >
                                {label}
                            </button>
                        }
                            .into_any()
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
