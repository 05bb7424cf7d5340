//! Wire bodies exchanged with the chat endpoint
//!
//! The contract is one POST per message: `{"message": "<text>"}` out,
//! `{"response": "<text>"}` back. No other fields are read.

use serde::{Deserialize, Serialize};

/// Client -> server body for `POST /chat`.
///
/// `message` defaults to empty on the way in, so a body without it reads
/// as an empty message rather than a rejected request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Server -> client body. `response` is displayed verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
