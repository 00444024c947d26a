// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Buffers validated records and ships them to the intakes in batches.

use crate::config::BridgeConfig;
use crate::logs::translate_logs;
use crate::record::{LogRecord, RecordType, SpanRecord};
use crate::secret::{SecretProvider, API_KEY_SECRET};
use crate::spans::build_agent_payload;
use crate::BridgeError;
use libdd_intake_client::{HttpClient, HttpClientError, HttpRequest, HttpResponse};
use prost::Message;
use serde_json::Value;
use std::fmt;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, trace};

/// Number of buffered records of one kind that triggers a flush of that kind.
///
/// The threshold counts records, not bytes: a batch of very large records can
/// still exceed the intake's request size limit.
pub const FLUSH_THRESHOLD: usize = 100;

const LOGS_CONTENT_TYPE: &str = "application/json";
const TRACES_CONTENT_TYPE: &str = "application/x-protobuf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryKind {
    Logs,
    Traces,
}

impl fmt::Display for DeliveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryKind::Logs => f.write_str("logs"),
            DeliveryKind::Traces => f.write_str("traces"),
        }
    }
}

/// Outcome of one successful flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    pub kind: DeliveryKind,
    /// Number of records carried by the request.
    pub records: usize,
    pub status: u16,
    /// Response body as returned by the intake.
    pub body: String,
}

/// Single-owner pipeline from event-table rows to the Datadog intakes.
///
/// Every call runs to completion on the caller's thread: requests are driven
/// by a private current-thread runtime, so the uploader must not be used from
/// inside another tokio runtime.
pub struct BatchUploader {
    config: BridgeConfig,
    api_key: String,
    client: HttpClient,
    runtime: Runtime,
    logs: Vec<LogRecord>,
    spans: Vec<SpanRecord>,
}

impl fmt::Debug for BatchUploader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchUploader")
            .field("config", &self.config)
            .field("pending_logs", &self.logs.len())
            .field("pending_spans", &self.spans.len())
            .finish_non_exhaustive()
    }
}

impl BatchUploader {
    /// Build an uploader whose client follows `config`. The API key is pulled
    /// from `secrets` once, here.
    pub fn new(config: BridgeConfig, secrets: &dyn SecretProvider) -> Result<Self, BridgeError> {
        let api_key = secrets.secret(API_KEY_SECRET)?;
        let runtime = new_runtime()?;
        let client = {
            let _guard = runtime.enter();
            config.build_client()?
        };
        Ok(Self::from_parts(config, api_key, client, runtime))
    }

    /// Build an uploader around an existing client. The client's own retry
    /// policy applies; `config` only supplies endpoints and payload settings.
    pub fn with_client(
        config: BridgeConfig,
        api_key: impl Into<String>,
        client: HttpClient,
    ) -> Result<Self, BridgeError> {
        Ok(Self::from_parts(config, api_key.into(), client, new_runtime()?))
    }

    fn from_parts(
        config: BridgeConfig,
        api_key: String,
        client: HttpClient,
        runtime: Runtime,
    ) -> Self {
        Self {
            config,
            api_key,
            client,
            runtime,
            logs: Vec::new(),
            spans: Vec::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn pending_logs(&self) -> usize {
        self.logs.len()
    }

    pub fn pending_spans(&self) -> usize {
        self.spans.len()
    }

    /// Accept one row of type `record_type`.
    ///
    /// The row is validated before it is buffered, so a failing row leaves
    /// both buffers unchanged. Returns the results of the flushes the row
    /// triggered, if any. When a flush fails after another one went through,
    /// the error is [`BridgeError::PartialDelivery`].
    pub fn process(
        &mut self,
        record_type: &str,
        payload: Value,
    ) -> Result<Vec<DeliveryResult>, BridgeError> {
        match record_type.parse::<RecordType>()? {
            RecordType::Span | RecordType::SpanEvent => {
                self.spans.push(SpanRecord::from_payload(payload)?);
            }
            RecordType::Log => {
                self.logs.push(LogRecord::from_payload(payload)?);
            }
            RecordType::Metric => {
                trace!("Dropping metric record");
                return Ok(Vec::new());
            }
        }

        let mut due = Vec::with_capacity(2);
        if self.spans.len() >= FLUSH_THRESHOLD {
            due.push(DeliveryKind::Traces);
        }
        if self.logs.len() >= FLUSH_THRESHOLD {
            due.push(DeliveryKind::Logs);
        }
        self.flush_in_order(&due)
    }

    /// Send every buffered log record in one request.
    ///
    /// Returns `None` without sending anything when the buffer is empty. On
    /// error the buffer is kept so the caller can retry the flush.
    pub fn flush_logs(&mut self) -> Result<Option<DeliveryResult>, BridgeError> {
        if self.logs.is_empty() {
            return Ok(None);
        }
        let body = serde_json::to_vec(&translate_logs(&self.logs))?;
        let request = HttpRequest::post(self.config.logs_url.as_str())
            .header("DD-API-KEY", self.api_key.as_str())
            .header("Content-Type", LOGS_CONTENT_TYPE)
            .body(body);

        let records = self.logs.len();
        debug!(records, url = %self.config.logs_url, "Flushing logs");
        let response = self.send(request)?;
        self.logs.clear();
        Ok(Some(delivered(DeliveryKind::Logs, records, &response)))
    }

    /// Send every buffered span in one agent payload.
    ///
    /// Same contract as [`BatchUploader::flush_logs`].
    pub fn flush_spans(&mut self) -> Result<Option<DeliveryResult>, BridgeError> {
        if self.spans.is_empty() {
            return Ok(None);
        }
        let payload = build_agent_payload(&self.spans, &self.config.env);
        let request = HttpRequest::post(self.config.traces_url.as_str())
            .header("Dd-Api-Key", self.api_key.as_str())
            .header("Content-Type", TRACES_CONTENT_TYPE)
            .header(
                "X-Datadog-Reported-Languages",
                self.config.reported_language.as_str(),
            )
            .body(payload.encode_to_vec());

        let records = self.spans.len();
        debug!(
            records,
            chunks = payload.tracer_payloads.first().map_or(0, |p| p.chunks.len()),
            url = %self.config.traces_url,
            "Flushing spans"
        );
        let response = self.send(request)?;
        self.spans.clear();
        Ok(Some(delivered(DeliveryKind::Traces, records, &response)))
    }

    /// Flush logs then spans, whatever their size. Call once when the source
    /// has no more rows.
    ///
    /// If the span flush fails after the logs went through, the logs result
    /// is carried by [`BridgeError::PartialDelivery`].
    pub fn end_of_stream(&mut self) -> Result<Vec<DeliveryResult>, BridgeError> {
        self.flush_in_order(&[DeliveryKind::Logs, DeliveryKind::Traces])
    }

    fn flush_in_order(
        &mut self,
        kinds: &[DeliveryKind],
    ) -> Result<Vec<DeliveryResult>, BridgeError> {
        let mut results = Vec::new();
        for kind in kinds {
            let flushed = match kind {
                DeliveryKind::Logs => self.flush_logs(),
                DeliveryKind::Traces => self.flush_spans(),
            };
            match flushed {
                Ok(result) => results.extend(result),
                Err(error) if results.is_empty() => return Err(error),
                Err(error) => {
                    return Err(BridgeError::PartialDelivery {
                        delivered: results,
                        error: Box::new(error),
                    })
                }
            }
        }
        Ok(results)
    }

    /// Send `request`. Only a 2xx answer counts as delivered.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BridgeError> {
        let response = self.runtime.block_on(self.client.send(request))?;
        if !(200..300).contains(&response.status_code) {
            return Err(HttpClientError::RequestFailed {
                status: response.status_code,
                body: response.text(),
            }
            .into());
        }
        Ok(response)
    }
}

fn new_runtime() -> Result<Runtime, BridgeError> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

fn delivered(kind: DeliveryKind, records: usize, response: &HttpResponse) -> DeliveryResult {
    DeliveryResult {
        kind,
        records,
        status: response.status_code,
        body: response.text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::StaticSecretProvider;
    use serde_json::json;

    fn uploader() -> BatchUploader {
        // Nothing here reaches the network: every test stays below the
        // threshold or fails validation.
        let config = BridgeConfig::builder()
            .logs_url("http://127.0.0.1:1/api/v2/logs")
            .traces_url("http://127.0.0.1:1/api/v0.2/traces")
            .build();
        let secrets = StaticSecretProvider::new().with_secret(API_KEY_SECRET, "key");
        BatchUploader::new(config, &secrets).unwrap()
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let config = BridgeConfig::builder().build();
        let err = BatchUploader::new(config, &StaticSecretProvider::new()).unwrap_err();
        assert!(matches!(err, BridgeError::Secret { .. }));
    }

    #[test]
    fn rows_are_routed_to_their_buffer() {
        let mut uploader = uploader();
        assert!(uploader.process("LOG", json!({"VALUE": "hi"})).unwrap().is_empty());
        assert!(uploader.process("SPAN", json!({})).unwrap().is_empty());
        assert!(uploader.process("SPAN_EVENT", json!({})).unwrap().is_empty());
        assert_eq!(uploader.pending_logs(), 1);
        assert_eq!(uploader.pending_spans(), 2);
    }

    #[test]
    fn metric_is_a_no_op() {
        let mut uploader = uploader();
        let results = uploader
            .process("METRIC", json!({"VALUE": 1.5, "TRACE": {"trace_id": "zz"}}))
            .unwrap();
        assert!(results.is_empty());
        assert_eq!((uploader.pending_logs(), uploader.pending_spans()), (0, 0));
    }

    #[test]
    fn unknown_record_type() {
        let mut uploader = uploader();
        let err = uploader.process("EVENT", json!({})).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownRecordType(t) if t == "EVENT"));
    }

    #[test]
    fn invalid_rows_are_not_buffered() {
        let mut uploader = uploader();
        assert!(matches!(
            uploader.process("LOG", json!({"RECORD": {"severity_text": "INFO"}})),
            Err(BridgeError::FieldMissing("VALUE"))
        ));
        assert!(matches!(
            uploader.process("SPAN", json!({"TRACE": {"trace_id": "not-hex"}})),
            Err(BridgeError::InvalidIdentifier(_))
        ));
        assert_eq!((uploader.pending_logs(), uploader.pending_spans()), (0, 0));
    }

    #[test]
    fn empty_flushes_send_nothing() {
        let mut uploader = uploader();
        assert_eq!(uploader.flush_logs().unwrap(), None);
        assert_eq!(uploader.flush_spans().unwrap(), None);
        assert!(uploader.end_of_stream().unwrap().is_empty());
    }

    #[test]
    fn kind_display() {
        assert_eq!(DeliveryKind::Logs.to_string(), "logs");
        assert_eq!(DeliveryKind::Traces.to_string(), "traces");
    }
}
