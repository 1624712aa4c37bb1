//! Glue between the widget and the server-rendered host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page renders "book this service" buttons (`.booking-btn`) and
//! optional extra close controls (`.close-booking`) outside the widget's own
//! view tree. Each one gets its own click listener at initialization; the
//! listeners live as long as the page.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use crate::state::booking::Service;

/// Element the widget mounts into when present; `<body>` otherwise.
pub const MOUNT_ELEMENT_ID: &str = "booking-widget-root";
pub const BOOKING_TRIGGER_SELECTOR: &str = ".booking-btn";
pub const CLOSE_TRIGGER_SELECTOR: &str = ".close-booking";

/// Query flag that opens the modal on page load.
pub const AUTO_OPEN_PARAM: (&str, &str) = ("book", "1");

/// Whether the page's query string (with or without the leading `?`)
/// carries `book=1`.
#[must_use]
pub fn auto_open_requested(search: &str) -> bool {
    let query = search.trim_start_matches('?');
    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .map(|pairs| {
            pairs
                .iter()
                .any(|(k, v)| k == AUTO_OPEN_PARAM.0 && v == AUTO_OPEN_PARAM.1)
        })
        .unwrap_or(false)
}

/// Service described by a trigger button's `data-service-*` attributes.
pub fn service_from_trigger<F>(attr: F) -> Service
where
    F: Fn(&str) -> Option<String>,
{
    let name = attr("data-service-name").unwrap_or_default();
    let price = attr("data-service-price");
    let duration = attr("data-service-duration");
    Service::from_raw(&name, price.as_deref(), duration.as_deref())
}

/// Query string of the current page, including the leading `?`.
#[cfg(feature = "csr")]
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Mount point for the widget's view tree.
#[cfg(feature = "csr")]
pub fn mount_target() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body())
}

/// All host elements matching `selector`.
#[cfg(feature = "csr")]
pub fn host_elements(selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach a click listener to `element` for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn on_click<F>(element: &web_sys::Element, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to bind click listener: {e:?}");
        return;
    }
    closure.forget();
}

/// Bind every `.booking-btn` on the page to `open`.
#[cfg(feature = "csr")]
pub fn bind_booking_triggers<F>(open: F) -> usize
where
    F: Fn(Service) + Clone + 'static,
{
    let triggers = host_elements(BOOKING_TRIGGER_SELECTOR);
    for trigger in &triggers {
        let open = open.clone();
        let source = trigger.clone();
        on_click(trigger, move |ev: web_sys::Event| {
            ev.prevent_default();
            open(service_from_trigger(|name| source.get_attribute(name)));
        });
    }
    triggers.len()
}

/// Bind every `.close-booking` on the page to `close`.
#[cfg(feature = "csr")]
pub fn bind_close_triggers<F>(close: F) -> usize
where
    F: Fn() + Clone + 'static,
{
    let triggers = host_elements(CLOSE_TRIGGER_SELECTOR);
    for trigger in &triggers {
        let close = close.clone();
        on_click(trigger, move |_| close());
    }
    triggers.len()
}
