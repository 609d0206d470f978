//! Wire types.
//!
//! Inbound: the `{ "message": ... }` body posted by the chat page.
//! Outbound: an OpenAI-style `chat/completions` request as accepted by the
//! Ark endpoint, and the subset of its response the proxy reads.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Take the user message, rejecting a missing or empty one.
    ///
    /// Any other string, whitespace included, is returned untouched.
    pub fn into_message(self) -> Result<String, ChatError> {
        match self.message {
            Some(m) if !m.is_empty() => Ok(m),
            _ => Err(ChatError::EmptyMessage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: Role,
    pub content: String,
}

/// Body of the outbound `chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
    pub stream: bool,
    pub temperature: f32,
}

/// The parts of a `chat/completions` response the proxy cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    /// R1 models return their chain of thought here. Logged, never relayed.
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

impl UpstreamResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

/// JSON error body returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
