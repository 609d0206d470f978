//! Configuration from environment variables.
//!
//! Read once at startup and injected into the server; nothing below `main`
//! touches the process environment.
//!
//! **Environment variables:**
//! - `DEEPSEEK_API_KEY`: bearer token for the upstream API (no default)
//! - `DEEPSEEK_API_URL`: chat-completions endpoint (default: Volcengine Ark)
//! - `PORT`: server port (default: 3000)
//! - `REQUEST_TIMEOUT_SECS`: upstream request timeout (default: 60)
//! - `STATIC_DIR`: directory holding `index.html` and other assets (default: `static`)

use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub port: u16,
    pub api_url: String,
    pub api_key: SecretString,
    pub request_timeout: Duration,
    pub static_dir: PathBuf,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: SecretString::from(String::new()),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ProxyConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            api_url: lookup("DEEPSEEK_API_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.api_url),
            api_key: lookup("DEEPSEEK_API_KEY")
                .map(SecretString::from)
                .unwrap_or(defaults.api_key),
            request_timeout: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
