//! reqwest-backed implementation of the chat transport

use async_trait::async_trait;
use chat_core::{ChatReply, ChatRequest};
use log::debug;
use reqwest::Client;

use crate::error::TransportError;
use crate::transport::ChatTransport;

/// Talks to a fixed chat endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
}

impl HttpChatTransport {
    /// `endpoint` is the full URL of the chat route, e.g.
    /// `http://127.0.0.1:8080/chat`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Use a preconfigured client (proxies, custom TLS, tests).
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send_message(&self, message: &str) -> Result<String, TransportError> {
        debug!("POST {} ({} bytes)", self.endpoint, message.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(TransportError::MalformedReply)?;
        Ok(reply.response)
    }
}
