// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! `libdd-intake-client` is the HTTP client used to push payloads to the
//! Datadog logs and trace intakes. It offers a simple `send()` API over a
//! concrete `HttpClient` struct backed by reqwest.
//!
//! Retries are opt-in. A [`RetryConfig`] can restrict retries to a fixed set
//! of transient status codes; any other error status is returned at once.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), libdd_intake_client::HttpClientError> {
//! use libdd_intake_client::{HttpClient, HttpRequest, RetryConfig};
//! use std::time::Duration;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(5))
//!     .retry(RetryConfig::new().max_retries(4).retry_on_status(&[429, 503]))
//!     .build()?;
//! let request = HttpRequest::post("https://http-intake.logs.datadoghq.com/api/v2/logs")
//!     .header("DD-API-KEY", "<key>")
//!     .body(b"[]".to_vec());
//! let response = client.send(request).await?;
//! println!("Status: {}", response.status_code);
//! # Ok(())
//! # }
//! ```

pub(crate) mod backend;
mod client;
mod config;
mod error;
mod request;
mod response;
/// Retry configuration for automatic request retries.
pub mod retry;

pub use client::HttpClient;
pub use config::HttpClientBuilder;
pub use error::HttpClientError;
pub use request::HttpRequest;
pub use response::HttpResponse;
pub use retry::RetryConfig;
