// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log intake (`/api/v2/logs`) entries.

use crate::record::LogRecord;
use serde::Serialize;
use serde_json::{Map, Value};

/// Severities that mark a log entry as an error in the log explorer.
const ERROR_STATUSES: [&str; 2] = ["ERROR", "CRITICAL"];

/// One element of the JSON array posted to the log intake.
///
/// `dd.trace_id` and `dd.span_id` carry the decimal form of the 64-bit
/// identifiers, which is what links a log to its trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub service: String,
    pub message: Value,
    pub status: Option<String>,
    #[serde(rename = "dd.trace_id")]
    pub trace_id: String,
    #[serde(rename = "dd.span_id")]
    pub span_id: String,
    #[serde(rename = "error.message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<Value>,
    #[serde(rename = "error.stack", skip_serializing_if = "Option::is_none")]
    pub error_stack: Option<Value>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<&LogRecord> for LogEntry {
    fn from(record: &LogRecord) -> Self {
        let is_error = record
            .status
            .as_deref()
            .is_some_and(|status| ERROR_STATUSES.contains(&status));
        LogEntry {
            service: record.service.clone(),
            message: record.message.clone(),
            status: record.status.clone(),
            trace_id: record.trace_id.to_string(),
            span_id: record.span_id.to_string(),
            error_message: is_error.then(|| record.message.clone()),
            error_stack: record.error_stack.clone(),
            attributes: record.attributes.clone(),
        }
    }
}

/// Translate a batch of log records into the log intake body.
pub fn translate_logs(records: &[LogRecord]) -> Vec<LogEntry> {
    records.iter().map(LogEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(payload: Value) -> Value {
        let record = LogRecord::from_payload(payload).unwrap();
        serde_json::to_value(LogEntry::from(&record)).unwrap()
    }

    #[test]
    fn error_log_with_trace_ids() {
        assert_eq!(
            entry(json!({
                "VALUE": "boom",
                "RECORD": {"severity_text": "ERROR"},
                "TRACE": {"trace_id": "1a", "span_id": "2b"}
            })),
            json!({
                "service": "unknown",
                "message": "boom",
                "status": "ERROR",
                "dd.trace_id": "26",
                "dd.span_id": "43",
                "error.message": "boom",
                "RECORD": {"severity_text": "ERROR"},
                "TRACE": {"trace_id": "1a", "span_id": "2b"}
            })
        );
    }

    #[test]
    fn critical_is_an_error() {
        let value = entry(json!({"VALUE": "down", "RECORD": {"severity_text": "CRITICAL"}}));
        assert_eq!(value["error.message"], json!("down"));
    }

    #[test]
    fn info_log_without_ids() {
        let value = entry(json!({"VALUE": "hello", "service": "sync"}));
        assert_eq!(
            value,
            json!({
                "service": "sync",
                "message": "hello",
                "status": null,
                "dd.trace_id": "0",
                "dd.span_id": "0"
            })
        );
    }

    #[test]
    fn exception_message_becomes_stack_regardless_of_status() {
        let value = entry(json!({
            "VALUE": "retrying",
            "RECORD": {"severity_text": "WARN"},
            "RECORD_ATTRIBUTES": {"exception.message": "Traceback (most recent call last)"}
        }));
        assert_eq!(value["status"], json!("WARN"));
        assert_eq!(
            value["error.stack"],
            json!("Traceback (most recent call last)")
        );
        assert!(value.get("error.message").is_none());
    }

    #[test]
    fn batch_keeps_order() {
        let records: Vec<LogRecord> = ["a", "b", "c"]
            .iter()
            .map(|m| LogRecord::from_payload(json!({ "VALUE": m })).unwrap())
            .collect();
        let messages: Vec<Value> = translate_logs(&records)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec![json!("a"), json!("b"), json!("c")]);
    }
}
