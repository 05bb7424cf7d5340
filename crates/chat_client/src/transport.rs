//! Transport seam between the widget controller and the network

use async_trait::async_trait;

use crate::error::TransportError;

/// Sends one user message and yields the bot's reply text.
///
/// Implementations own their connection details; callers only see the
/// message in and the reply (or a transport error) out.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<String, TransportError>;
}
