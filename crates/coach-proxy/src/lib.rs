//! Coach Proxy - relays chat messages to a DeepSeek model behind a fixed
//! Life Coach system prompt.
//!
//! The browser posts `{ "message": "..." }` to `/chat`. The proxy wraps it in a
//! `chat/completions` request (system prompt + user turn, `stream: false`),
//! calls the Volcengine Ark endpoint once with a bounded timeout, and answers
//! with the assistant's text as `text/plain`. Any failure becomes a JSON
//! `{ "error", "message" }` body.

pub mod config;
pub mod error;
pub mod proxy;
pub mod server;
pub mod types;

pub use config::ProxyConfig;
pub use error::ChatError;
pub use proxy::ChatProxy;
pub use server::serve;
