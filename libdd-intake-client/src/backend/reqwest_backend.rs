// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! reqwest-based HTTP backend.

use crate::{HttpClientError, HttpRequest, HttpResponse};

/// A backend that sends HTTP requests via [`reqwest::Client`].
///
/// Holds a connection-pooling client that is reused across all requests.
#[derive(Debug)]
pub(crate) struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Construct a new backend with the given timeout.
    pub(crate) fn new(timeout: std::time::Duration) -> Result<Self, HttpClientError> {
        install_crypto_provider();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpClientError::InvalidConfig(e.to_string()))?;
        Ok(Self { client })
    }
}

/// reqwest is built without a default provider; ring is installed
/// process-wide the first time a backend is created.
#[cfg(feature = "https")]
fn install_crypto_provider() {
    // An error only means a provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[cfg(not(feature = "https"))]
fn install_crypto_provider() {}

impl super::Backend for ReqwestBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let mut builder = self.client.post(&request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if status >= 400 {
            return Err(HttpClientError::RequestFailed {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(HttpResponse {
            status_code: status,
            body,
        })
    }
}

/// Map a `reqwest::Error` to our `HttpClientError` variants.
fn map_reqwest_error(e: reqwest::Error) -> HttpClientError {
    if e.is_timeout() {
        HttpClientError::TimedOut
    } else if e.is_connect() {
        HttpClientError::ConnectionFailed(e.to_string())
    } else if e.is_builder() {
        HttpClientError::InvalidConfig(e.to_string())
    } else {
        HttpClientError::IoError(e.to_string())
    }
}
