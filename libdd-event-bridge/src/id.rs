// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Conversion of the hexadecimal OpenTelemetry identifiers found in event
//! tables into the 64-bit integers used by the Datadog intakes.
//!
//! Trace ids are usually 128-bit and only their low 64 bits are kept, which is
//! what Datadog tracers put in `dd.trace_id` for log correlation. Span ids are
//! already 64-bit and are never truncated.

use crate::BridgeError;

/// Decode a trace id. `None` decodes to 0, any other value is parsed as a
/// base-16 integer of arbitrary length and reduced modulo 2^64.
pub fn decode_trace_id(value: Option<&str>) -> Result<u64, BridgeError> {
    let Some(value) = value else {
        return Ok(0);
    };
    let digits = hex_digits(value)?;
    // The low 64 bits are the last 16 hex digits.
    let low = &digits[digits.len().saturating_sub(16)..];
    u64::from_str_radix(low, 16).map_err(|_| invalid(value))
}

/// Decode a span id. `None` decodes to 0, any other value must be a base-16
/// integer that fits in 64 bits.
pub fn decode_span_id(value: Option<&str>) -> Result<u64, BridgeError> {
    let Some(value) = value else {
        return Ok(0);
    };
    u64::from_str_radix(hex_digits(value)?, 16).map_err(|_| invalid(value))
}

fn hex_digits(value: &str) -> Result<&str, BridgeError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(value));
    }
    Ok(digits)
}

fn invalid(value: &str) -> BridgeError {
    BridgeError::InvalidIdentifier(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ids_decode_to_zero() {
        assert_eq!(decode_trace_id(None).unwrap(), 0);
        assert_eq!(decode_span_id(None).unwrap(), 0);
    }

    #[test]
    fn short_ids() {
        assert_eq!(decode_trace_id(Some("1a")).unwrap(), 26);
        assert_eq!(decode_span_id(Some("2b")).unwrap(), 43);
        assert_eq!(decode_span_id(Some("0")).unwrap(), 0);
        assert_eq!(decode_trace_id(Some("FF")).unwrap(), 255);
    }

    #[test]
    fn trace_id_keeps_low_64_bits() {
        let id = "01b887a035284edeab312449ad9c603a";
        let expected = (u128::from_str_radix(id, 16).unwrap() & u64::MAX as u128) as u64;
        assert_eq!(decode_trace_id(Some(id)).unwrap(), expected);
        assert_eq!(expected, 0xab312449ad9c603a);
    }

    #[test]
    fn trace_id_longer_than_128_bits() {
        assert_eq!(
            decode_trace_id(Some("ffff0000000000000000000000000000000000000001")).unwrap(),
            1
        );
    }

    #[test]
    fn span_id_is_not_truncated() {
        assert_eq!(
            decode_span_id(Some("268a33e0301d1b78")).unwrap(),
            0x268a33e0301d1b78
        );
        assert_eq!(decode_span_id(Some("ffffffffffffffff")).unwrap(), u64::MAX);
        assert_eq!(decode_span_id(Some("00000000000000000001")).unwrap(), 1);
    }

    #[test]
    fn span_id_overflow_is_rejected() {
        assert!(matches!(
            decode_span_id(Some("10000000000000000")),
            Err(BridgeError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn prefix_and_whitespace_are_accepted() {
        assert_eq!(decode_trace_id(Some(" 0x1A ")).unwrap(), 26);
        assert_eq!(decode_span_id(Some("0X2b")).unwrap(), 43);
    }

    #[test]
    fn malformed_ids_fail() {
        for bad in ["not-hex", "", "   ", "0x", "12g4", "-1"] {
            match decode_trace_id(Some(bad)) {
                Err(BridgeError::InvalidIdentifier(v)) => assert_eq!(v, bad),
                other => panic!("{bad:?} decoded to {other:?}"),
            }
            assert!(decode_span_id(Some(bad)).is_err(), "{bad:?}");
        }
    }
}
