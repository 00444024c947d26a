// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use crate::HttpClientError;

/// Status codes the Datadog intakes answer with when a request may succeed if
/// sent again.
pub const TRANSIENT_STATUS_CODES: [u16; 6] = [403, 429, 500, 502, 503, 504];

/// Configuration for automatic request retries with exponential backoff.
///
/// Retry is opt-in: pass a `RetryConfig` to
/// [`crate::HttpClientBuilder::retry`] to enable it.
///
/// Transport errors (connection failures, timeouts, I/O) are always retried.
/// Error statuses are retried only when they appear in the status forcelist;
/// without a forcelist every error status is retried.
/// [`HttpClientError::InvalidConfig`] is never retried.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub(crate) max_retries: u32,
    pub(crate) initial_delay: Duration,
    pub(crate) jitter: bool,
    pub(crate) status_forcelist: Option<Vec<u16>>,
}

impl RetryConfig {
    /// Create a new retry config with defaults: 3 retries, 100ms initial
    /// delay, exponential backoff with jitter, every error status retried.
    pub fn new() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            jitter: true,
            status_forcelist: None,
        }
    }

    /// Retry policy of the intake uploads: 4 retries on
    /// [`TRANSIENT_STATUS_CODES`].
    pub fn transient() -> Self {
        Self::new()
            .max_retries(4)
            .retry_on_status(&TRANSIENT_STATUS_CODES)
    }

    /// Set the maximum number of retry attempts (not counting the initial
    /// request).
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the initial delay before the first retry. Subsequent retries
    /// double this value (exponential backoff).
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Enable or disable jitter. When enabled, each delay is replaced with
    /// a uniform random value between 0 and the calculated delay.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Only retry responses whose status is in `codes`.
    pub fn retry_on_status(mut self, codes: &[u16]) -> Self {
        self.status_forcelist = Some(codes.to_vec());
        self
    }

    /// The configured maximum number of retries.
    pub fn retries(&self) -> u32 {
        self.max_retries
    }

    /// Calculate the delay for a given attempt (1-indexed).
    ///
    /// Exponential backoff: `initial_delay * 2^(attempt - 1)`.
    /// With jitter: uniform random from 0 to the calculated delay.
    pub(crate) fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self
            .initial_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)));
        if self.jitter {
            let base_nanos = base.as_nanos() as u64;
            if base_nanos == 0 {
                return Duration::ZERO;
            }
            Duration::from_nanos(fastrand::u64(0..base_nanos))
        } else {
            base
        }
    }

    /// Returns true if the error is worth another attempt under this policy.
    pub(crate) fn is_retryable(&self, err: &HttpClientError) -> bool {
        match err {
            HttpClientError::InvalidConfig(_) => false,
            HttpClientError::RequestFailed { status, .. } => self
                .status_forcelist
                .as_ref()
                .is_none_or(|codes| codes.contains(status)),
            _ => true,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}
