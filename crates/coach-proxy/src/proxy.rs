//! Upstream chat-completion client.
//!
//! Every call sends the fixed Life Coach system prompt followed by the user's
//! message and asks for a non-streaming completion. The whole response body is
//! parsed as one JSON document and `choices[0].message.content` is returned.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, error, info};

use crate::config::ProxyConfig;
use crate::error::ChatError;
use crate::types::{Role, UpstreamMessage, UpstreamRequest, UpstreamResponse};

pub const MODEL: &str = "deepseek-r1-250120";
pub const TEMPERATURE: f32 = 0.6;

pub const SYSTEM_PROMPT: &str = "你是一位专业的 Life Coach，拥有丰富的个人成长和职业发展指导经验。你的目标是：
1. 通过深入的对话理解用户的困惑和需求
2. 提供具体、可行的建议和解决方案
3. 鼓励用户积极思考和行动
4. 帮助用户建立良好的习惯和思维方式
5. 在对话中保持专业、友善和支持的态度";

/// Forwards one user message per call to the configured endpoint.
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ChatProxy {
    client: Client,
    api_url: String,
}

impl ChatProxy {
    pub fn new(config: &ProxyConfig) -> Result<Self, ChatError> {
        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_key.expose_secret().trim()
        ))
        .map_err(|_| ChatError::Configuration("invalid API key format".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // The Ark endpoint accepts this even for `stream: false` requests.
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ChatError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn build_request(&self, message: &str) -> UpstreamRequest {
        UpstreamRequest {
            model: MODEL.to_string(),
            messages: vec![
                UpstreamMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                UpstreamMessage {
                    role: Role::User,
                    content: message.to_string(),
                },
            ],
            stream: false,
            temperature: TEMPERATURE,
        }
    }

    /// Send `message` upstream and return the assistant's answer text.
    ///
    /// Exactly one request is made; failures are never retried.
    pub async fn complete(&self, message: &str) -> Result<String, ChatError> {
        let request = self.build_request(message);
        debug!(
            url = %self.api_url,
            model = %request.model,
            message_chars = message.chars().count(),
            "sending upstream request"
        );

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, timeout = e.is_timeout(), "upstream request failed");
                ChatError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let headers = format!("{:?}", response.headers());
            let body = response.text().await.unwrap_or_default();
            error!(%status, %headers, body = %body, "upstream error");
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(%status, "upstream request succeeded");

        let body = response.text().await.map_err(|e| {
            error!(error = %e, timeout = e.is_timeout(), "failed to read upstream body");
            ChatError::from(e)
        })?;

        extract_content(&body)
    }
}

/// Parse a complete `chat/completions` body and pull out the first answer.
pub fn extract_content(body: &str) -> Result<String, ChatError> {
    let parsed: UpstreamResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, body = %body, "upstream body is not a completion");
        ChatError::InvalidResponse(e.to_string())
    })?;

    if let Some(reasoning) = parsed
        .choices
        .first()
        .and_then(|c| c.message.as_ref())
        .and_then(|m| m.reasoning_content.as_deref())
    {
        debug!(reasoning_chars = reasoning.chars().count(), "dropping reasoning content");
    }

    match parsed.first_content() {
        Some(content) => Ok(content.to_string()),
        None => {
            error!(body = %body, "upstream completion has no message content");
            Err(ChatError::InvalidResponse(
                "response contained no message content".into(),
            ))
        }
    }
}
