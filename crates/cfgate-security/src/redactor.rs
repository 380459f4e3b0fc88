//! Read-side masking

use serde_json::{Map, Value};

use crate::{MASK_CHAR, VISIBLE_PREFIX, is_secret_key};

/// Keep the first four characters and star out the rest.
///
/// Values of four characters or fewer come back unchanged.
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len <= VISIBLE_PREFIX {
        return value.to_string();
    }

    let mut masked: String = value.chars().take(VISIBLE_PREFIX).collect();
    masked.extend(std::iter::repeat_n(MASK_CHAR, len - VISIBLE_PREFIX));
    masked
}

/// Produce a display copy of `value` with secret-looking string leaves masked.
///
/// Keys, sequence lengths and value types are preserved. A secret-looking key
/// that holds a mapping or sequence is recursed into, not masked wholesale.
pub fn redact(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut redacted = Map::with_capacity(map.len());
            for (key, val) in map {
                let val = match val {
                    Value::String(text) if is_secret_key(&key) => {
                        Value::String(mask_secret(&text))
                    }
                    other => redact(other),
                };
                redacted.insert(key, val);
            }
            Value::Object(redacted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(redact).collect()),
        other => other,
    }
}
