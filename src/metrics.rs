//! Typed metric operations over the raw endpoints
//!
//! Each operation issues exactly one request (two for debt-to-equity),
//! extracts one well-known key from the JSON response, and either returns
//! the date-keyed series as-is or parses a single number. Nothing is
//! cached; repeated calls always re-fetch.
//!
//! The two operation families share the same client and credentials:
//! [`technical`] for price-derived indicators, [`fundamental`] for values
//! from company financial statements.

use serde_json::Value;

use crate::error::{Error, Result};

pub mod fundamental;
pub mod technical;

/// Date-keyed indicator series, in the order returned by the remote service.
///
/// `serde_json` is built with `preserve_order`, so iteration follows the
/// wire order rather than a re-sort.
pub type Series = serde_json::Map<String, Value>;

/// Extract the object stored under `key`, consuming the parsed response.
///
/// An absent key usually means the service answered with an error body
/// (invalid symbol, rate limit note) instead of data; both surface as
/// [`Error::MissingField`].
pub(crate) fn series(body: &str, key: &str) -> Result<Series> {
    let mut json: Value = serde_json::from_str(body)?;
    match json.get_mut(key).map(Value::take) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(Error::MissingField(key.to_string())),
    }
}

/// Parse the numeric field `field` out of a JSON object.
pub(crate) fn numeric_field(obj: &Value, field: &str) -> Result<f64> {
    let value = obj
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_string()))?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::Malformed {
            field: field.to_string(),
            value: n.to_string(),
        }),
        Value::String(s) => s.parse::<f64>().map_err(|_| Error::Malformed {
            field: field.to_string(),
            value: s.clone(),
        }),
        other => Err(Error::Malformed {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}
