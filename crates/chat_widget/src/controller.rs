//! WidgetController - the send pipeline
//!
//! One send cycle: trim the pending input, guard against empty text, append
//! the user entry, clear the input, issue the request, then append either
//! the reply or the fixed fallback. The user entry always precedes its bot
//! entry because the request is only issued after the user entry lands.
//!
//! Overlapping sends are not serialized: callers sharing a controller via
//! `Arc` can have several requests in flight, and replies are appended in
//! arrival order. That matches the behavior this widget replaces and is a
//! documented gap, not a guarantee.

use std::sync::{Arc, Mutex, MutexGuard};

use chat_client::ChatTransport;
use chat_core::{Entry, Sender, Transcript};
use log::error;

use crate::view::TranscriptView;

/// Fixed user-facing text appended when the request pipeline fails.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

pub struct WidgetController<V: TranscriptView> {
    transcript: Mutex<Transcript>,
    pending: Mutex<String>,
    transport: Arc<dyn ChatTransport>,
    view: V,
}

impl<V: TranscriptView> WidgetController<V> {
    /// Construct the controller with its two collaborators. This replaces
    /// page-load wiring; call it once per session.
    pub fn new(transport: Arc<dyn ChatTransport>, view: V) -> Self {
        Self {
            transcript: Mutex::new(Transcript::new()),
            pending: Mutex::new(String::new()),
            transport,
            view,
        }
    }

    /// Replace the pending input text, as keystrokes would.
    pub fn set_pending(&self, text: impl Into<String>) {
        *self.lock_pending() = text.into();
    }

    pub fn pending(&self) -> String {
        self.lock_pending().clone()
    }

    /// Snapshot of the transcript in append order.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    /// Append an entry and notify the view. Side effect only.
    pub fn append_entry(&self, text: impl Into<String>, sender: Sender) {
        let entry = Entry::new(text, sender);
        self.lock_transcript().push(entry.clone());
        self.view.entry_appended(&entry);
    }

    /// Run one send cycle against the current pending input.
    ///
    /// Empty or whitespace-only input appends nothing and issues no
    /// request. Failures are logged and surface only as the fallback bot
    /// entry; the already-appended user entry is never rolled back.
    pub async fn send(&self) {
        let message = {
            let mut pending = self.lock_pending();
            let trimmed = pending.trim().to_string();
            if trimmed.is_empty() {
                return;
            }
            // Clear before the request goes out so the input is ready for
            // new text while this one is in flight.
            pending.clear();
            trimmed
        };

        self.append_entry(message.as_str(), Sender::User);

        match self.transport.send_message(&message).await {
            Ok(reply) => self.append_entry(reply, Sender::Bot),
            Err(err) => {
                error!("chat request failed: {err}");
                self.append_entry(FALLBACK_MESSAGE, Sender::Bot);
            }
        }
    }

    // Neither lock is ever held across an await, so poisoning only follows
    // a panic in Transcript::push or a view callback.
    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().expect("transcript lock poisoned")
    }

    fn lock_pending(&self) -> MutexGuard<'_, String> {
        self.pending.lock().expect("pending input lock poisoned")
    }
}
