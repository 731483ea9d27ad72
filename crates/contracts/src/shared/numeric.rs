//! Tolerant decoding for backend numerics.
//!
//! Decimal columns come back from the backend either as JSON numbers or as
//! numeric strings (e.g. `"100.50"`), and may be null or absent entirely.
//! Anything unparseable decodes as `None`; callers treat that as zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn opt_flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_flexible_f64")]
        value: Option<f64>,
    }

    fn decode(json: &str) -> Option<f64> {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(decode(r#"{"value": 100.5}"#), Some(100.5));
        assert_eq!(decode(r#"{"value": "100.50"}"#), Some(100.5));
        assert_eq!(decode(r#"{"value": " 7 "}"#), Some(7.0));
        assert_eq!(decode(r#"{"value": 0}"#), Some(0.0));
    }

    #[test]
    fn junk_null_and_missing_decode_as_none() {
        assert_eq!(decode(r#"{"value": "abc"}"#), None);
        assert_eq!(decode(r#"{"value": null}"#), None);
        assert_eq!(decode(r#"{}"#), None);
        assert_eq!(decode(r#"{"value": true}"#), None);
    }
}
