//! Knowledge base lookup
//!
//! The bot answers from a JSON file of question/answer pairs. An incoming
//! message is tokenized into lowercase word tokens and scored against every
//! stored question by the share of the question's tokens it overlaps; the
//! best-scoring question with any overlap at all wins.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Reply for an empty incoming message.
pub const EMPTY_PROMPT_REPLY: &str = "Please enter a message.";

/// Reply when the message reads as a greeting.
pub const GREETING_REPLY: &str = "Hello! \u{1F60A} How can I assist you today?";

/// Reply when no stored question overlaps the message.
pub const UNKNOWN_REPLY: &str = "I don't know the answer. Can you teach me?";

const GREETINGS: [&str; 3] = ["hello", "hi", "hey"];

static WORD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9']+").expect("word token pattern")
});

/// One stored question/answer pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuestionEntry {
    pub question: String,
    pub answer: String,
}

/// The full question/answer store, loaded from disk.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct KnowledgeBase {
    pub questions: Vec<QuestionEntry>,
}

impl KnowledgeBase {
    /// Load the store from a JSON file. A missing file behaves as an empty
    /// store; an unreadable or unparseable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no knowledge base at {}, treating as empty", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(AppError::KnowledgeBase(err)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// The stored question whose tokens best overlap the input, if any do.
    /// On a tie the earliest stored question wins.
    pub fn best_match(&self, input: &str) -> Option<&QuestionEntry> {
        let input_tokens = tokens(input);
        let mut best: Option<(&QuestionEntry, f64)> = None;

        for entry in &self.questions {
            let question_tokens = tokens(&entry.question);
            if question_tokens.is_empty() {
                continue;
            }
            let overlap = input_tokens.intersection(&question_tokens).count();
            if overlap == 0 {
                continue;
            }
            let score = overlap as f64 / question_tokens.len() as f64;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((entry, score));
            }
        }

        best.map(|(entry, _)| entry)
    }

    /// Full reply pipeline for one non-empty message: greeting check first,
    /// then best-match lookup, then the teach-me fallback.
    pub fn respond(&self, message: &str) -> String {
        if is_greeting(message) {
            return GREETING_REPLY.to_string();
        }
        let normalized = normalize(message);
        match self.best_match(&normalized) {
            Some(entry) => entry.answer.clone(),
            None => UNKNOWN_REPLY.to_string(),
        }
    }
}

/// A message greets if it contains any greeting word anywhere, case
/// insensitively. Substring containment is intentional.
pub fn is_greeting(message: &str) -> bool {
    let lowered = message.to_lowercase();
    GREETINGS.iter().any(|greeting| lowered.contains(greeting))
}

/// Trim and sentence-case the message: first letter uppercased, the rest
/// lowered. Matching is token based, so this only affects what gets logged
/// or echoed, never which question wins.
pub fn normalize(message: &str) -> String {
    let trimmed = message.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn tokens(text: &str) -> HashSet<String> {
    WORD_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
