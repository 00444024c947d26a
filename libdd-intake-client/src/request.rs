// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP request type for `libdd-intake-client`.

use bytes::Bytes;

/// An outgoing POST to an intake.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Absolute URL string (e.g. `"https://trace.agent.datadoghq.com/api/v0.2/traces"`).
    pub url: String,

    /// Request headers as a list of (name, value) pairs, in insertion order.
    pub headers: Vec<(String, String)>,

    /// Request body bytes. Empty for requests with no body.
    pub body: Bytes,
}

impl HttpRequest {
    /// A POST request to `url` with no headers and no body.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}
