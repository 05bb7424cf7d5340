use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the request pipeline.
///
/// The widget collapses every variant into one fallback entry; the variants
/// exist so logs can tell a refused connection from a bad body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat endpoint returned status {0}")]
    Status(StatusCode),

    #[error("malformed reply body: {0}")]
    MalformedReply(#[source] reqwest::Error),
}
