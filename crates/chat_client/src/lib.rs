//! chat_client - HTTP transport for the chat endpoint
//!
//! One request per message: `POST <endpoint>` with a JSON body carrying the
//! message text, reply parsed as JSON carrying the response text. No retry,
//! no explicit timeout; the transport default applies.

pub mod error;
pub mod http;
pub mod transport;

pub use error::TransportError;
pub use http::HttpChatTransport;
pub use transport::ChatTransport;
