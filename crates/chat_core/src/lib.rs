//! chat_core - Core types shared across the chat crates
//!
//! This crate provides the foundational types used by the widget controller,
//! the HTTP client, and the chat service:
//! - `transcript` - Entry, Sender, Transcript
//! - `wire` - request/reply bodies exchanged with the chat endpoint

pub mod transcript;
pub mod wire;

// Re-export commonly used types
pub use transcript::{Entry, Sender, Transcript};
pub use wire::{ChatReply, ChatRequest};
