//! Transcript - the ordered chat history
//!
//! Entries are append-only: once pushed they are never mutated, removed, or
//! reordered. Display order is exactly push order.

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Stable lowercase label, also used for styling hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered line of chat history, tagged by sender.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub sender: Sender,
}

impl Entry {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }
}

/// Append-only list of entries for one page session.
///
/// There is intentionally no API for mutating or removing entries.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// All entries in push order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Entry::user("first"));
        transcript.push(Entry::bot("second"));
        transcript.push(Entry::user("third"));

        let texts: Vec<&str> = transcript
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_push_never_touches_prior_entries() {
        let mut transcript = Transcript::new();
        transcript.push(Entry::user("hello"));
        let before = transcript.entries().to_vec();

        transcript.push(Entry::bot("world"));
        assert_eq!(&transcript.entries()[..1], &before[..]);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.as_str(), "user");
        assert_eq!(Sender::Bot.to_string(), "bot");
    }
}
