//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `BookingWidget` handle from Leptos context, render its
//! state, and route user events back to its operations.

pub mod alert_stack;
pub mod booking_modal;
pub mod service_picker;
pub mod slot_grid;
