//! Canonical JSON bytes: the only serialization that feeds a digest.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are emitted in lexicographic byte order.
//! 2. Compact form, no whitespace.
//! 3. Strings and scalars are escaped by `serde_json`.
//! 4. Numbers must be integers. Floats are rejected so a digest never
//!    depends on float formatting; callers convert real values to
//!    fixed-point first.

use std::fmt;

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` refused to encode a scalar.
    Encode { detail: String },
}

impl fmt::Display for CanonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Encode { detail } => write!(f, "canonical JSON encode failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is a float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            raw: n.to_string(),
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => write_scalar(buf, value),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
            Ok(())
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &Value::String(key.clone()))?;
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
            Ok(())
        }
    }
}

fn write_scalar(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *buf, value).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}
