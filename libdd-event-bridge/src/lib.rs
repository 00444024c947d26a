// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Forwards event-table rows to Datadog.
//!
//! Log rows are posted as JSON to the logs intake, span rows are grouped by
//! trace and posted as a protobuf `AgentPayload` to the trace intake. Both
//! kinds are buffered by a [`BatchUploader`] and sent once
//! [`uploader::FLUSH_THRESHOLD`] rows of a kind are pending, or when the
//! stream ends.
//!
//! ```rust,no_run
//! # fn example() -> Result<(), libdd_event_bridge::BridgeError> {
//! use libdd_event_bridge::{BatchUploader, BridgeConfig, EnvSecretProvider};
//! use serde_json::json;
//!
//! let mut uploader = BatchUploader::new(BridgeConfig::from_env()?, &EnvSecretProvider)?;
//! uploader.process("LOG", json!({"VALUE": "hello", "RECORD": {"severity_text": "INFO"}}))?;
//! for result in uploader.end_of_stream()? {
//!     println!("{}: {}", result.kind, result.body);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod id;
pub mod logs;
pub mod meta;
pub mod record;
pub mod secret;
pub mod spans;
pub mod uploader;

pub use config::BridgeConfig;
pub use error::BridgeError;
pub use secret::{EnvSecretProvider, FileSecretProvider, SecretProvider, StaticSecretProvider};
pub use uploader::{BatchUploader, DeliveryKind, DeliveryResult};
