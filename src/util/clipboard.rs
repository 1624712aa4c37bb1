//! Copy-to-clipboard buttons on the host page.
//!
//! A host control opts in with `data-copy-text="..."`. Clicking it writes the
//! text to the clipboard and swaps the control's label to a confirmation for
//! [`COPY_FEEDBACK_MS`]. Nothing is remembered between clicks apart from the
//! label being restored.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[cfg(feature = "csr")]
use crate::error::BookingError;

pub const COPY_TEXT_ATTR: &str = "data-copy-text";
pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_FAILED_MESSAGE: &str = "Unable to copy the text";
/// Present on a control while it shows the confirmation label.
pub const COPIED_MARKER_ATTR: &str = "data-copied";

/// Text to copy from a control's attribute; blank values copy nothing.
#[must_use]
pub fn copy_target(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Markup to restore once the confirmation ends. `None` while a confirmation
/// is already showing: the current markup is the confirmation label, and the
/// pending restore still holds the original.
#[must_use]
pub fn label_to_restore(copied_marker: Option<String>, current_markup: String) -> Option<String> {
    match copied_marker {
        Some(_) => None,
        None => Some(current_markup),
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// `Clipboard` when the browser rejects the write (permissions, insecure
/// context).
#[cfg(feature = "csr")]
pub async fn copy_text(text: &str) -> Result<(), BookingError> {
    let window = web_sys::window().ok_or_else(|| BookingError::Clipboard("no window".to_owned()))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| BookingError::Clipboard(format!("{e:?}")))
}

/// Show the confirmation label on `button`, restoring its markup later.
#[cfg(feature = "csr")]
fn show_copied(button: web_sys::Element) {
    let Some(original) = label_to_restore(button.get_attribute(COPIED_MARKER_ATTR), button.inner_html()) else {
        return;
    };
    button.set_text_content(Some(COPIED_LABEL));
    if let Err(e) = button.set_attribute(COPIED_MARKER_ATTR, "true") {
        leptos::logging::warn!("failed to mark copied button: {e:?}");
    }
    gloo_timers::callback::Timeout::new(COPY_FEEDBACK_MS, move || {
        button.set_inner_html(&original);
        if let Err(e) = button.remove_attribute(COPIED_MARKER_ATTR) {
            leptos::logging::warn!("failed to unmark copied button: {e:?}");
        }
    })
    .forget();
}

/// Bind every `[data-copy-text]` control on the page.
#[cfg(feature = "csr")]
pub fn bind_copy_buttons() -> usize {
    let buttons = crate::util::host::host_elements(&format!("[{COPY_TEXT_ATTR}]"));
    for button in &buttons {
        let source = button.clone();
        crate::util::host::on_click(button, move |_| {
            let Some(text) = copy_target(source.get_attribute(COPY_TEXT_ATTR)) else {
                return;
            };
            let button = source.clone();
            leptos::task::spawn_local(async move {
                match copy_text(&text).await {
                    Ok(()) => show_copied(button),
                    Err(e) => {
                        leptos::logging::warn!("{e}");
                        if let Some(window) = web_sys::window() {
                            if let Err(e) = window.alert_with_message(COPY_FAILED_MESSAGE) {
                                leptos::logging::warn!("failed to show alert: {e:?}");
                            }
                        }
                    }
                }
            });
        });
    }
    buttons.len()
}
