//! Decoding of per-style option payloads.
//!
//! Each style declares a plain struct of boolean flags deriving
//! `Deserialize` with `#[serde(default, rename_all = "camelCase")]`.
//! Absent flags are `false` and keys the style does not know are ignored;
//! any other shape is rejected.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Decode a style's options from an opaque JSON payload.
///
/// `null` yields the defaults. A payload that is not an object, or that
/// carries a non-boolean value for a recognized flag, fails with
/// [`Error::InvalidOptions`] naming `style`.
pub fn decode_options<T>(style: &str, payload: &Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match payload {
        Value::Null => Ok(T::default()),
        Value::Object(_) => T::deserialize(payload)
            .map_err(|e| Error::invalid_options(style, e.to_string())),
        other => Err(Error::invalid_options(
            style,
            format!("expected an object, found {}", kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, rename_all = "camelCase")]
    struct SampleOptions {
        extra_spacing: bool,
        export_all_types: bool,
    }

    #[test]
    fn test_absent_flags_default_to_false() {
        let opts: SampleOptions =
            decode_options("sample", &json!({"extraSpacing": true})).unwrap();
        assert!(opts.extra_spacing);
        assert!(!opts.export_all_types);
    }

    #[test]
    fn test_null_payload_is_default() {
        let opts: SampleOptions = decode_options("sample", &Value::Null).unwrap();
        assert_eq!(opts, SampleOptions::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let opts: SampleOptions =
            decode_options("sample", &json!({"somethingElse": true})).unwrap();
        assert_eq!(opts, SampleOptions::default());
    }

    #[test]
    fn test_non_boolean_value_is_rejected() {
        let err = decode_options::<SampleOptions>("sample", &json!({"extraSpacing": "yes"}))
            .unwrap_err();
        match err {
            Error::InvalidOptions { style, .. } => assert_eq!(style, "sample"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        for payload in [json!([true]), json!("extraSpacing"), json!(true), json!(1)] {
            let err = decode_options::<SampleOptions>("sample", &payload).unwrap_err();
            assert!(matches!(err, Error::InvalidOptions { .. }));
        }
    }
}
