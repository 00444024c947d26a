// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Messages accepted by the Datadog trace intake (`/api/v0.2/traces`).
//!
//! The structs in [`pb`] are generated from the `.proto` files under
//! `src/pb/`; run `cargo build --features generate-protobuf` to refresh them.

#[rustfmt::skip]
pub mod pb;
