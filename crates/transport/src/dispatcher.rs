use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Credentials;
use crate::descriptor::RequestDescriptor;
use crate::error::{DispatchError, Status};
use crate::metrics::{MetricsSnapshot, RequestMetrics};
use crate::retry::RetryPolicy;

/// The single integration point between API bindings and the network.
/// Bindings hand a descriptor over and get the parsed response JSON back;
/// transport, auth application, retries and JSON parsing all live behind
/// this trait. The pending future doubles as the request handle: dropping
/// it aborts the underlying call.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<Value, DispatchError>;
}

/// Production dispatcher over reqwest. Holds no per-request state of its
/// own; everything request-specific comes from the descriptor context, so
/// one dispatcher can serve any number of differently configured clients.
pub struct HttpDispatcher {
    client: reqwest::Client,
    metrics: Arc<RequestMetrics>,
}

impl HttpDispatcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            metrics: RequestMetrics::new(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn build_request(
        &self,
        descriptor: &RequestDescriptor,
        url: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Request, DispatchError> {
        let context = &descriptor.context;

        let mut builder = self
            .client
            .request(descriptor.method.clone(), url)
            .header(header::USER_AGENT, context.user_agent.as_str())
            .timeout(Duration::from_secs(context.timeout_secs));

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        match &context.credentials {
            Credentials::ApiKey(key) => {
                builder = builder.query(&[("key", key.as_str())]);
            }
            Credentials::BearerToken(token) => {
                builder = builder.bearer_auth(token);
            }
            Credentials::None => {}
        }

        if let Some(body) = &descriptor.params.body {
            builder = builder.json(body);
        }

        builder.build().map_err(DispatchError::Transport)
    }

    async fn send_once(
        &self,
        descriptor: &RequestDescriptor,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Value, DispatchError> {
        let request = self.build_request(descriptor, url, query)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(DispatchError::Transport)?;

        let http_status = response.status();
        let body = response.text().await.map_err(DispatchError::Transport)?;

        if !http_status.is_success() {
            return Err(DispatchError::Api {
                status: Status::from_error_body(http_status.as_u16(), &body),
            });
        }

        serde_json::from_str(&body).map_err(DispatchError::Decode)
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<Value, DispatchError> {
        descriptor.validate()?;
        let (url, query) = descriptor.expanded_url()?;

        let request_id = Uuid::new_v4();
        debug!(
            request_id = %request_id,
            method = %descriptor.method,
            url = %url,
            "dispatching request"
        );

        let policy = RetryPolicy::from_config(&descriptor.context.retry);
        let started = Instant::now();

        let result = policy
            .retry_if(
                url.as_str(),
                || self.send_once(&descriptor, &url, &query),
                DispatchError::is_retryable,
            )
            .await;

        let elapsed = started.elapsed();
        match &result {
            Ok(_) => {
                self.metrics.record(true, elapsed);
                debug!(
                    request_id = %request_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "request completed"
                );
            }
            Err(e) => {
                self.metrics.record(false, elapsed);
                warn!(
                    request_id = %request_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "request failed"
                );
            }
        }

        result
    }
}
