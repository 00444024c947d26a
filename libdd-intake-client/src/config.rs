// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Configuration types for `libdd-intake-client`.

use std::time::Duration;

use crate::retry::RetryConfig;

/// Settings fixed when an [`crate::HttpClient`] is built.
#[derive(Debug, Clone)]
pub(crate) struct HttpClientConfig {
    pub(crate) timeout: Duration,
    pub(crate) retry: Option<RetryConfig>,
}

/// Builder for [`crate::HttpClient`].
///
/// Obtain via [`crate::HttpClient::builder`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl HttpClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable automatic retries with the given configuration.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    /// Build the [`crate::HttpClient`].
    ///
    /// Returns [`crate::HttpClientError::InvalidConfig`] if the timeout was
    /// not set.
    pub fn build(self) -> Result<crate::HttpClient, crate::HttpClientError> {
        let timeout = self.timeout.ok_or_else(|| {
            crate::HttpClientError::InvalidConfig("timeout is required".to_owned())
        })?;
        crate::HttpClient::from_config(HttpClientConfig {
            timeout,
            retry: self.retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_missing_timeout() {
        let result = HttpClientBuilder::new().build();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("timeout is required"));
    }

    #[test]
    fn builder_with_retry() {
        let result = HttpClientBuilder::new()
            .timeout(Duration::from_secs(1))
            .retry(RetryConfig::transient())
            .build();
        assert!(result.is_ok());
    }
}
