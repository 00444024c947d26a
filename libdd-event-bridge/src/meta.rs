// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Render an attribute value as a span tag. Strings are kept as they are,
/// scalars use their textual form and arrays/objects become compact JSON.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Coerce every value of `attributes` into a span `meta` map.
pub fn to_meta(attributes: &Map<String, Value>) -> HashMap<String, String> {
    attributes
        .iter()
        .map(|(k, v)| (k.clone(), coerce_to_string(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(coerce_to_string(&json!("issues")), "issues");
        assert_eq!(coerce_to_string(&json!(16756)), "16756");
        assert_eq!(coerce_to_string(&json!(-1.5)), "-1.5");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&Value::Null), "null");
    }

    #[test]
    fn structured_values_become_json() {
        assert_eq!(coerce_to_string(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(
            coerce_to_string(&json!({"code": "STATUS_CODE_UNSET"})),
            r#"{"code":"STATUS_CODE_UNSET"}"#
        );
    }

    #[test]
    fn meta_map() {
        let attributes = json!({"db.user": "SYSTEM", "snow.patch": 29, "tags": ["x"]});
        let meta = to_meta(attributes.as_object().unwrap());
        assert_eq!(meta.len(), 3);
        assert_eq!(meta["db.user"], "SYSTEM");
        assert_eq!(meta["snow.patch"], "29");
        assert_eq!(meta["tags"], r#"["x"]"#);
    }
}
