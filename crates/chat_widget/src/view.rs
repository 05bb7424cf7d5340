//! Display seam of the widget

use chat_core::Entry;

/// Receives every entry as it is appended to the transcript.
///
/// Implementations render the entry and keep the newest one visible. There
/// is no return value and no failure mode; display is a pure side effect.
pub trait TranscriptView: Send + Sync {
    fn entry_appended(&self, entry: &Entry);
}

/// View that renders nothing. Useful for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl TranscriptView for NullView {
    fn entry_appended(&self, _entry: &Entry) {}
}
