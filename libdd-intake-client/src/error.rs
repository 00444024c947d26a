// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error types for `libdd-intake-client`.

use thiserror::Error;

/// Errors that can occur while talking to an intake.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The TCP connection to the intake could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request exceeded the configured timeout duration.
    #[error("request timed out")]
    TimedOut,

    /// The intake answered with an HTTP error status code.
    ///
    /// Raised for any status of 400 or above.
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        /// The HTTP status code (e.g. 403, 503).
        status: u16,
        /// The response body, lossy-decoded as UTF-8.
        body: String,
    },

    /// The client configuration or the request itself was invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O error occurred during the request.
    #[error("I/O error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display() {
        let err = HttpClientError::RequestFailed {
            status: 503,
            body: "service unavailable".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 503: service unavailable"
        );
    }

    #[test]
    fn invalid_config_display() {
        let err = HttpClientError::InvalidConfig("missing timeout".to_owned());
        assert_eq!(err.to_string(), "invalid configuration: missing timeout");
    }
}
