// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The public `HttpClient` struct.

use crate::backend::reqwest_backend::ReqwestBackend;
use crate::backend::Backend;
use crate::config::{HttpClientBuilder, HttpClientConfig};
use crate::retry::RetryConfig;
use crate::{HttpClientError, HttpRequest, HttpResponse};
use tracing::{debug, error};

/// A high-level async HTTP client.
///
/// Constructed once and reused across many [`HttpClient::send`] calls. Holds
/// a connection pool internally.
#[derive(Debug)]
pub struct HttpClient {
    backend: ReqwestBackend,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Returns a builder for constructing an `HttpClient` with advanced options.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub(crate) fn from_config(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let backend = ReqwestBackend::new(config.timeout)?;
        Ok(Self { backend, config })
    }

    /// Send an HTTP request and return the response.
    ///
    /// If retry is configured, errors accepted by the [`RetryConfig`] are
    /// retried with exponential backoff until the retry budget is spent.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        match &self.config.retry {
            Some(retry) => self.send_with_retry(request, retry).await,
            None => self.send_once(request).await,
        }
    }

    async fn send_once(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        self.backend.send(request).await
    }

    async fn send_with_retry(
        &self,
        request: HttpRequest,
        retry: &RetryConfig,
    ) -> Result<HttpResponse, HttpClientError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(
                url = %request.url,
                attempt,
                max_retries = retry.max_retries,
                "Attempting request"
            );
            match self.send_once(request.clone()).await {
                Ok(response) => {
                    debug!(status = response.status_code, attempt, "Request succeeded");
                    return Ok(response);
                }
                Err(err) if attempt <= retry.max_retries && retry.is_retryable(&err) => {
                    debug!(
                        error = %err,
                        attempt,
                        remaining_retries = retry.max_retries + 1 - attempt,
                        "Retrying after request error"
                    );
                    tokio::time::sleep(retry.delay_for_attempt(attempt)).await;
                }
                Err(err) => {
                    error!(error = %err, attempts = attempt, "Giving up on request");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builder_creates_client_without_retry() {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert!(client.config.retry.is_none());
    }

    #[tokio::test]
    async fn send_returns_error_when_no_server() {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let req = HttpRequest::post("http://127.0.0.1:1/ping");
        let result = client.send(req).await;
        assert!(result.is_err());
    }
}
