// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Trace intake (`/api/v0.2/traces`) payloads.

use crate::meta::to_meta;
use crate::record::SpanRecord;
use indexmap::IndexMap;
use libdd_intake_protobuf::pb;

/// Sampling priority given to every chunk: auto-keep.
const PRIORITY_AUTO_KEEP: i32 = 1;

fn to_pb_span(record: &SpanRecord) -> pb::Span {
    pb::Span {
        service: record.service.clone(),
        name: record.name.clone(),
        resource: record.resource.clone(),
        trace_id: record.trace_id,
        span_id: record.span_id,
        parent_id: record.parent_id,
        start: record.start,
        duration: record.duration,
        meta: to_meta(&record.meta),
        error: 0,
        ..Default::default()
    }
}

/// Group spans by trace id into chunks. Chunks follow the order in which
/// their trace was first seen, spans keep their buffer order.
pub fn group_by_trace(records: &[SpanRecord]) -> Vec<pb::TraceChunk> {
    let mut traces: IndexMap<u64, Vec<pb::Span>> = IndexMap::new();
    for record in records {
        traces
            .entry(record.trace_id)
            .or_default()
            .push(to_pb_span(record));
    }
    traces
        .into_values()
        .map(|spans| pb::TraceChunk {
            priority: PRIORITY_AUTO_KEEP,
            spans,
            ..Default::default()
        })
        .collect()
}

/// Build the single agent payload sent for one span flush.
pub fn build_agent_payload(records: &[SpanRecord], env: &str) -> pb::AgentPayload {
    pb::AgentPayload {
        tracer_payloads: vec![pb::TracerPayload {
            chunks: group_by_trace(records),
            env: env.to_owned(),
            ..Default::default()
        }],
        ..Default::default()
    }
}
