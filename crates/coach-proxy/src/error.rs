//! Chat error types and their HTTP translation.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::types::ErrorBody;

pub const INTERNAL_ERROR: &str = "服务器内部错误";
pub const EMPTY_MESSAGE: &str = "消息内容不能为空";
pub const METHOD_NOT_ALLOWED: &str = "方法不允许";
pub const INVALID_BODY: &str = "请求格式错误";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("消息内容不能为空")]
    EmptyMessage,

    #[error("方法不允许: {0}")]
    MethodNotAllowed(String),

    #[error("请求格式错误: {0}")]
    InvalidBody(String),

    #[error("API请求失败 ({status})")]
    Upstream { status: u16, body: String },

    #[error("API请求超时")]
    Timeout,

    #[error("网络错误: {0}")]
    Network(reqwest::Error),

    #[error("API响应格式错误: {0}")]
    InvalidResponse(String),

    #[error("配置错误: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e)
        }
    }
}

impl ChatError {
    /// The short `error` field shown to clients.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmptyMessage => EMPTY_MESSAGE,
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED,
            Self::InvalidBody(_) => INVALID_BODY,
            _ => INTERNAL_ERROR,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.label().to_string(),
            message: self.to_string(),
        }
    }
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyMessage | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}
