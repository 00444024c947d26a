// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Typed views over the loosely-typed rows of an event table.
//!
//! A row is validated once, when it enters the bridge: identifiers are
//! decoded, required fields are checked and defaults are applied. Whatever
//! reaches a buffer can always be translated.

use crate::id::{decode_span_id, decode_trace_id};
use crate::meta::coerce_to_string;
use crate::BridgeError;
use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::str::FromStr;

const UNKNOWN: &str = "unknown";

/// Keys a log entry sets itself; source fields with these names are dropped.
const RESERVED_LOG_KEYS: [&str; 6] = [
    "message",
    "status",
    "dd.trace_id",
    "dd.span_id",
    "error.message",
    "error.stack",
];

/// Kind of a row, as tagged by the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Span,
    SpanEvent,
    Log,
    Metric,
}

impl FromStr for RecordType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPAN" => Ok(RecordType::Span),
            "SPAN_EVENT" => Ok(RecordType::SpanEvent),
            "LOG" => Ok(RecordType::Log),
            "METRIC" => Ok(RecordType::Metric),
            other => Err(BridgeError::UnknownRecordType(other.to_owned())),
        }
    }
}

/// A log row ready to become a log intake entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub service: String,
    /// Taken from `VALUE`.
    pub message: Value,
    /// Taken from `RECORD.severity_text`.
    pub status: Option<String>,
    pub trace_id: u64,
    pub span_id: u64,
    /// Taken from `RECORD_ATTRIBUTES["exception.message"]`.
    pub error_stack: Option<Value>,
    /// Remaining top-level fields, forwarded as log attributes.
    pub attributes: Map<String, Value>,
}

impl LogRecord {
    /// Validate a log row.
    ///
    /// Identifiers found in `TRACE` are overridden by the ones found in
    /// `RECORD_ATTRIBUTES`, so instrumentation can attach a log to a different
    /// trace than the one the event table recorded.
    pub fn from_payload(payload: Value) -> Result<Self, BridgeError> {
        let mut record = into_object(payload)?;
        let message = record
            .remove("VALUE")
            .ok_or(BridgeError::FieldMissing("VALUE"))?;

        let mut trace_id = 0;
        let mut span_id = 0;
        for name in ["TRACE", "RECORD_ATTRIBUTES"] {
            if let Some(section) = section(&record, name)? {
                if let Some(value) = section.get("trace_id") {
                    trace_id = decode_trace_id(id_text(value)?.as_deref())?;
                }
                if let Some(value) = section.get("span_id") {
                    span_id = decode_span_id(id_text(value)?.as_deref())?;
                }
            }
        }

        let status = section(&record, "RECORD")?
            .and_then(|r| r.get("severity_text"))
            .and_then(non_null)
            .map(|v| text(v).into_owned());
        let error_stack = section(&record, "RECORD_ATTRIBUTES")?
            .and_then(|r| r.get("exception.message"))
            .cloned();
        let service = text_or_unknown(record.remove("service").as_ref());

        for key in RESERVED_LOG_KEYS {
            record.remove(key);
        }

        Ok(LogRecord {
            service,
            message,
            status,
            trace_id,
            span_id,
            error_stack,
            attributes: record,
        })
    }
}

/// A span or span event row ready to become an intake span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanRecord {
    pub service: String,
    /// Taken from `SCOPE.name`.
    pub name: String,
    /// Taken from `RECORD.name`.
    pub resource: String,
    pub trace_id: u64,
    pub span_id: u64,
    /// Taken from `RECORD.parent_span_id`.
    pub parent_id: u64,
    /// Nanoseconds since the Unix epoch, taken from `date`.
    pub start: i64,
    /// Nanoseconds.
    pub duration: i64,
    /// `RECORD_ATTRIBUTES` merged with `RESOURCE_ATTRIBUTES`, the latter
    /// winning on collisions.
    pub meta: Map<String, Value>,
}

impl SpanRecord {
    /// Validate a span row.
    pub fn from_payload(payload: Value) -> Result<Self, BridgeError> {
        let record = into_object(payload)?;
        let trace = section(&record, "TRACE")?;
        let body = section(&record, "RECORD")?;
        let scope = section(&record, "SCOPE")?;

        let trace_id = decode_trace_id(optional_id(trace, "trace_id")?.as_deref())?;
        let span_id = decode_span_id(optional_id(trace, "span_id")?.as_deref())?;
        let parent_id = decode_span_id(optional_id(body, "parent_span_id")?.as_deref())?;

        let mut meta = section(&record, "RECORD_ATTRIBUTES")?
            .cloned()
            .unwrap_or_default();
        if let Some(resource) = section(&record, "RESOURCE_ATTRIBUTES")? {
            meta.extend(resource.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Ok(SpanRecord {
            service: text_or_unknown(record.get("service")),
            name: text_or_unknown(scope.and_then(|s| s.get("name"))),
            resource: text_or_unknown(body.and_then(|b| b.get("name"))),
            trace_id,
            span_id,
            parent_id,
            start: start_nanos(record.get("date"))?,
            duration: duration_nanos(record.get("duration"))?,
            meta,
        })
    }
}

fn into_object(payload: Value) -> Result<Map<String, Value>, BridgeError> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(BridgeError::invalid_field(
            "payload",
            format!("expected an object, got {other}"),
        )),
    }
}

/// A nested section of a row. Absent and null sections are `None`.
fn section<'a>(
    record: &'a Map<String, Value>,
    name: &'static str,
) -> Result<Option<&'a Map<String, Value>>, BridgeError> {
    match record.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(BridgeError::invalid_field(
            name,
            format!("expected an object, got {other}"),
        )),
    }
}

fn non_null(value: &Value) -> Option<&Value> {
    (!value.is_null()).then_some(value)
}

/// Identifier text; numbers are read through their decimal form.
fn id_text(value: &Value) -> Result<Option<Cow<'_, str>>, BridgeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(Cow::Borrowed(s))),
        Value::Number(n) => Ok(Some(Cow::Owned(n.to_string()))),
        other => Err(BridgeError::InvalidIdentifier(other.to_string())),
    }
}

fn optional_id<'a>(
    section: Option<&'a Map<String, Value>>,
    key: &str,
) -> Result<Option<Cow<'a, str>>, BridgeError> {
    match section.and_then(|s| s.get(key)) {
        Some(value) => id_text(value),
        None => Ok(None),
    }
}

fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(coerce_to_string(other)),
    }
}

fn text_or_unknown(value: Option<&Value>) -> String {
    value
        .and_then(non_null)
        .map_or_else(|| UNKNOWN.to_owned(), |v| text(v).into_owned())
}

fn start_nanos(value: Option<&Value>) -> Result<i64, BridgeError> {
    let Some(value) = value.and_then(non_null) else {
        return Ok(0);
    };
    if let Value::String(s) = value {
        let s = s.trim();
        if let Ok(nanos) = s.parse::<i64>() {
            return Ok(nanos);
        }
        return parse_timestamp(s).ok_or_else(|| {
            BridgeError::invalid_field("date", format!("unrecognized timestamp {s:?}"))
        });
    }
    nanos(value, "date")
}

fn duration_nanos(value: Option<&Value>) -> Result<i64, BridgeError> {
    match value.and_then(non_null) {
        None => Ok(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            BridgeError::invalid_field("duration", format!("expected nanoseconds, got {s:?}"))
        }),
        Some(value) => nanos(value, "duration"),
    }
}

fn nanos(value: &Value, field: &'static str) -> Result<i64, BridgeError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| in_i64_range(*f)).map(|f| f as i64))
            .ok_or_else(|| BridgeError::invalid_field(field, format!("{n} is out of range"))),
        other => Err(BridgeError::invalid_field(
            field,
            format!("expected nanoseconds, got {other}"),
        )),
    }
}

/// `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
fn in_i64_range(f: f64) -> bool {
    f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// RFC 3339, or the `YYYY-MM-DD HH:MM:SS[.fff]` form event tables print,
/// read as UTC.
fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_nanos_opt();
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|dt| dt.and_utc().timestamp_nanos_opt())
}
