//! Records exchanged with the fundraising API and the builder's page model.
//!
//! Backend payloads are passed through to tables largely as-is, so the record
//! types are lenient: identifiers and amounts accept numbers or strings, and
//! missing fields fall back to defaults.

pub mod audit_log;
pub mod campaign;
pub mod category;
pub mod outreach;
pub mod page_config;
pub mod template_catalog;
pub mod transaction;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `"abc"`, `42` or `null` and yields a string id.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Accepts `12.5`, `"12.5"` or `null`; unparsable strings become `0.0`.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "lenient_string")]
        id: String,
        #[serde(deserialize_with = "lenient_amount")]
        amount: f64,
    }

    #[test]
    fn test_lenient_fields() {
        let probe: Probe = serde_json::from_str(r#"{"id": 7, "amount": "12.50"}"#).unwrap();
        assert_eq!(probe.id, "7");
        assert_eq!(probe.amount, 12.5);

        let probe: Probe = serde_json::from_str(r#"{"id": "c-1", "amount": null}"#).unwrap();
        assert_eq!(probe.id, "c-1");
        assert_eq!(probe.amount, 0.0);
    }
}
