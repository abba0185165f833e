//! Bounded retries around a completion client.
//!
//! The reference deployment made each backend call exactly once; retries and
//! the request timeout are hardening extensions layered on top, so a
//! transient rate limit or gateway error does not cost a whole run.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use synapse_common::Result;
use tracing::warn;

use crate::client::{LlmClient, LlmRequest, LlmResponse};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

pub struct RetryingClient<T: LlmClient> {
    inner: T,
    config: RetryConfig,
}

impl<T: LlmClient> RetryingClient<T> {
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Transient failures worth another attempt: rate limits and 5xx-class
    /// server trouble. Auth and malformed-request errors are not retried.
    fn is_retryable(error_msg: &str) -> bool {
        let lower = error_msg.to_lowercase();
        lower.contains("429")
            || lower.contains("rate limit")
            || lower.contains("500")
            || lower.contains("502")
            || lower.contains("503")
            || lower.contains("504")
            || lower.contains("server error")
            || lower.contains("bad gateway")
            || lower.contains("service unavailable")
            || lower.contains("gateway timeout")
            || lower.contains("timed out")
    }

    /// Extract a `Retry-After: N` hint (seconds) from an error message and
    /// convert it to milliseconds. Servers that send one know their own
    /// backpressure better than our backoff schedule does.
    fn parse_retry_after(error_msg: &str) -> Option<u64> {
        let lower = error_msg.to_lowercase();
        let pos = lower.find("retry-after")?;
        let after = &error_msg[pos..];
        for word in after.split_whitespace().skip(1) {
            let cleaned = word.trim_end_matches(|c: char| !c.is_ascii_digit());
            if let Ok(secs) = cleaned.parse::<u64>() {
                return Some(secs * 1000);
            }
        }
        None
    }

    fn compute_delay(&self, attempt: u32) -> u64 {
        let delay = self.config.initial_delay_ms as f64
            * self.config.backoff_multiplier.powi(attempt as i32);
        (delay as u64).min(self.config.max_delay_ms)
    }
}

#[async_trait]
impl<T: LlmClient> LlmClient for RetryingClient<T> {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let mut attempt = 0;
        loop {
            match self.inner.complete(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    let error_msg = e.to_string();
                    if attempt == self.config.max_retries || !Self::is_retryable(&error_msg) {
                        return Err(e);
                    }

                    let delay = Self::parse_retry_after(&error_msg)
                        .unwrap_or_else(|| self.compute_delay(attempt));
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay,
                        error = %error_msg,
                        "Retrying completion request"
                    );
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
                    attempt += 1;
                }
            }
        }
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
