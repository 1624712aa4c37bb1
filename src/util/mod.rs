//! Utility helpers shared across the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and host-page concerns from the state
//! machine and components so the pure parts stay testable natively.

pub mod clipboard;
pub mod host;
pub mod time;
