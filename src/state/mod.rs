//! Widget state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `booking` holds the modal/slot/selection state machine and `alerts` the
//! transient notification stack. Both are plain structs wrapped in
//! `RwSignal`s by the widget handle.

pub mod alerts;
pub mod booking;
