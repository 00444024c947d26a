// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod reqwest_backend;

/// The internal async transport backend.
///
/// `HttpClient` holds a concrete backend type, never a `dyn Backend`.
pub(crate) trait Backend {
    /// Send one HTTP request and return the response. No retries.
    ///
    /// Any status of 400 or above is returned as
    /// [`crate::HttpClientError::RequestFailed`].
    async fn send(
        &self,
        request: crate::HttpRequest,
    ) -> Result<crate::HttpResponse, crate::HttpClientError>;
}
