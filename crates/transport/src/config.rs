use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable per-client configuration. Captured once at construction and
/// shared by every request the client issues; the dispatcher reads it from
/// the descriptor context. Independently configured clients never share
/// state through this type.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host the endpoint paths are appended to.
    pub base_url: String,
    pub credentials: Credentials,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub retry: RetryConfig,
}

/// Static credentials applied by the dispatcher. API keys travel as a `key`
/// query parameter, tokens as a bearer Authorization header.
#[derive(Clone, PartialEq)]
pub enum Credentials {
    None,
    ApiKey(String),
    BearerToken(String),
}

// Debug must not reveal key or token text; descriptors carrying this
// config get debug-formatted in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => f.write_str("None"),
            Credentials::ApiKey(_) => f.write_str("ApiKey(redacted)"),
            Credentials::BearerToken(_) => f.write_str("BearerToken(redacted)"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1000,
            max_backoff_ms: 10000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            // Endpoint paths start with '/', so a trailing slash here would
            // produce double slashes in request URLs.
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Credentials::None,
            user_agent: format!("language-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.credentials = Credentials::ApiKey(key.to_string());
        self
    }

    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.credentials = Credentials::BearerToken(token.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
