// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP response type for `libdd-intake-client`.

/// An HTTP response received from the server.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 200, 202, 503).
    pub status_code: u16,

    /// Response body bytes.
    pub body: bytes::Bytes,
}

impl HttpResponse {
    /// The body as text, lossy-decoded as UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
