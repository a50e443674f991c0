//! # Lookup HTTP Client
//!
//! Shared HTTP plumbing for the lookup clients.
//!
//! Wraps `reqwest` with:
//! - a fixed request timeout
//! - JSON deserialization
//! - status-code to [`LookupError`] mapping
//! - a bounded retry policy for transient failures
//!
//! # Examples
//!
//! ```ignore
//! use vehicle_registry::infrastructure::lookups::http::{LookupHttpClient, RetryPolicy};
//!
//! let client = LookupHttpClient::new("pricing", 5000, RetryPolicy::default())?;
//! let quote: PriceQuote = client.get_json(url, &[("vehicleId", "4")]).await?;
//! ```

use crate::infrastructure::lookups::error::{LookupError, LookupResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Bounded retry policy for transient lookup failures.
///
/// `max_attempts` counts the initial request; `max_attempts = 3` means
/// at most two retries. The backoff doubles after every failed attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, initial request included.
    pub max_attempts: u32,
    /// Backoff before the first retry, in milliseconds.
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_ms: 100,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff_ms: 0,
        }
    }

    /// Backoff before the retry following attempt `attempt` (0-based).
    #[must_use]
    pub const fn backoff_for(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_ms << attempt)
    }
}

/// HTTP client for a single lookup collaborator.
#[derive(Debug, Clone)]
pub struct LookupHttpClient {
    client: Client,
    service: &'static str,
    retry: RetryPolicy,
}

impl LookupHttpClient {
    /// Creates a client with the given timeout and retry policy.
    ///
    /// # Arguments
    ///
    /// * `service` - Collaborator name used in error reporting.
    /// * `timeout_ms` - Request timeout in milliseconds.
    /// * `retry` - Retry policy for transient failures.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Internal`] if the underlying client cannot
    /// be created.
    pub fn new(service: &'static str, timeout_ms: u64, retry: RetryPolicy) -> LookupResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                LookupError::internal(service, format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            service,
            retry,
        })
    }

    /// Returns the collaborator name this client reports errors under.
    #[inline]
    #[must_use]
    pub const fn service(&self) -> &'static str {
        self.service
    }

    /// Makes a GET request with query parameters and deserializes the
    /// JSON response, retrying transient failures per the policy.
    ///
    /// # Errors
    ///
    /// Returns the last [`LookupError`] once attempts are exhausted, or
    /// immediately for non-retryable failures.
    pub async fn get_json<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> LookupResult<T> {
        let mut attempt = 0;
        loop {
            match self.get_once(url, params).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    attempt += 1;
                    if !error.is_retryable() || attempt >= self.retry.max_attempts {
                        return Err(error);
                    }
                    let backoff = self.retry.backoff_for(attempt - 1);
                    tracing::warn!(
                        service = self.service,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %error,
                        "lookup request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    async fn get_once<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> LookupResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> LookupResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                LookupError::protocol(self.service, format!("failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a [`LookupError`].
    fn map_reqwest_error(&self, error: reqwest::Error) -> LookupError {
        if error.is_timeout() {
            LookupError::timeout(self.service, "request timed out")
        } else if error.is_connect() {
            LookupError::connection(self.service, format!("connection failed: {}", error))
        } else {
            LookupError::connection(self.service, format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a [`LookupError`].
    fn map_status_error(&self, status: StatusCode, body: &str) -> LookupError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
                LookupError::invalid_request(self.service, format!("{}: {}", status, body))
            }
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                LookupError::unavailable(self.service, format!("server error ({}): {}", status, body))
            }
            _ => LookupError::protocol(self.service, format!("HTTP error ({}): {}", status, body)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = LookupHttpClient::new("pricing", 5000, RetryPolicy::default());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().service(), "pricing");
    }

    #[test]
    fn retry_policy_backoff_doubles() {
        let policy = RetryPolicy {
            max_attempts: 3,
            backoff_ms: 100,
        };
        assert_eq!(policy.backoff_for(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(400));
    }

    #[test]
    fn retry_policy_none_is_single_attempt() {
        assert_eq!(RetryPolicy::none().max_attempts, 1);
    }

    #[test]
    fn status_mapping() {
        let client = LookupHttpClient::new("maps", 1000, RetryPolicy::none()).unwrap();

        let err = client.map_status_error(StatusCode::NOT_FOUND, "no such road");
        assert!(err.is_client_error());

        let err = client.map_status_error(StatusCode::SERVICE_UNAVAILABLE, "down");
        assert!(err.is_retryable());

        let err = client.map_status_error(StatusCode::IM_A_TEAPOT, "short and stout");
        assert!(!err.is_retryable());
        assert!(!err.is_client_error());
    }
}
