//! chat_widget - the chat widget controller
//!
//! Wires a pending-input buffer and an append-only transcript to a
//! [`ChatTransport`]. The controller is constructed once with its transport
//! and view passed in; there are no ambient globals.

pub mod controller;
pub mod view;

pub use controller::{WidgetController, FALLBACK_MESSAGE};
pub use view::TranscriptView;
