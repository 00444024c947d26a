// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::DeliveryResult;
use libdd_intake_client::HttpClientError;
use thiserror::Error;

/// Errors surfaced by [`crate::BatchUploader`] and the translation functions.
///
/// Nothing is swallowed inside the bridge: every variant reaches the caller of
/// `process`, `flush_*` or `end_of_stream`.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A non-null trace or span id is not a valid hexadecimal number.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The record type tag is not one of SPAN, SPAN_EVENT, LOG or METRIC.
    #[error("unknown record type: {0}")]
    UnknownRecordType(String),

    /// A field the translation cannot do without is absent.
    #[error("required field {0} is missing")]
    FieldMissing(&'static str),

    /// A field is present but has a shape the translation cannot use.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Path of the offending field, e.g. `TRACE` or `duration`.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The intake rejected the batch, after retries where they apply. The
    /// buffer that produced the request is left untouched.
    #[error("delivery failed: {0}")]
    DeliveryFailure(#[from] HttpClientError),

    /// One flush of a multi-flush call went through and a later one failed.
    /// The delivered batches are gone from their buffers; `delivered` holds
    /// their results.
    #[error("{error} (after {} successful deliveries)", .delivered.len())]
    PartialDelivery {
        /// Results of the flushes that completed, in order.
        delivered: Vec<DeliveryResult>,
        /// The failure that stopped the call.
        #[source]
        error: Box<BridgeError>,
    },

    /// A log batch could not be serialized.
    #[error("failed to encode payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The configuration read from the environment is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The API key could not be retrieved.
    #[error("failed to retrieve secret {name}: {reason}")]
    Secret {
        /// Name of the requested secret.
        name: String,
        /// Why the provider failed.
        reason: String,
    },

    /// The runtime driving the HTTP client could not be created.
    #[error("failed to create runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl BridgeError {
    /// Results of the flushes that completed before this error.
    pub fn delivered(&self) -> &[DeliveryResult] {
        match self {
            BridgeError::PartialDelivery { delivered, .. } => delivered,
            _ => &[],
        }
    }

    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        BridgeError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            BridgeError::InvalidIdentifier("zz".to_owned()).to_string(),
            "invalid identifier: \"zz\""
        );
        assert_eq!(
            BridgeError::FieldMissing("VALUE").to_string(),
            "required field VALUE is missing"
        );
        assert_eq!(
            BridgeError::invalid_field("TRACE", "expected an object").to_string(),
            "invalid field TRACE: expected an object"
        );
    }

    #[test]
    fn partial_delivery_keeps_results() {
        let err = BridgeError::PartialDelivery {
            delivered: vec![DeliveryResult {
                kind: crate::DeliveryKind::Logs,
                records: 3,
                status: 202,
                body: "{}".to_owned(),
            }],
            error: Box::new(BridgeError::FieldMissing("VALUE")),
        };
        assert_eq!(err.delivered().len(), 1);
        assert_eq!(
            err.to_string(),
            "required field VALUE is missing (after 1 successful deliveries)"
        );
        assert!(BridgeError::Config("x".to_owned()).delivered().is_empty());
    }

    #[test]
    fn delivery_failure_wraps_client_error() {
        let err: BridgeError = HttpClientError::RequestFailed {
            status: 400,
            body: "bad".to_owned(),
        }
        .into();
        assert!(matches!(
            err,
            BridgeError::DeliveryFailure(HttpClientError::RequestFailed { status: 400, .. })
        ));
    }
}
