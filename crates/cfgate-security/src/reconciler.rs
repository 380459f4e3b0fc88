//! Write-side reconciliation of client updates against stored values

use serde_json::{Map, Value};

use crate::{MASK_MARKER, is_secret_key};

/// A string carrying the mask marker means "unchanged", never a literal value.
pub fn is_masked(value: &Value) -> bool {
    value.as_str().is_some_and(|text| text.contains(MASK_MARKER))
}

/// Merge a client update into the stored subtree at the same position.
///
/// For each key of a mapping update:
/// - a secret-looking key carrying a masked placeholder keeps the stored value,
///   or is dropped when nothing is stored;
/// - a nested mapping over a stored mapping is reconciled recursively;
/// - anything else is taken from the update as is.
///
/// A stored `null` counts as absent. Sequences are replaced wholesale.
pub fn reconcile(update: Value, stored: &Value) -> Value {
    let Value::Object(stored) = stored else {
        return update;
    };
    let update = match update {
        Value::Object(map) => map,
        other => return other,
    };

    let mut merged = Map::with_capacity(update.len());
    for (key, value) in update {
        let original = stored.get(&key).filter(|v| !v.is_null());

        if is_secret_key(&key) && is_masked(&value) {
            if let Some(original) = original {
                merged.insert(key, original.clone());
            }
            continue;
        }

        let value = match original {
            Some(original) => reconcile(value, original),
            None => value,
        };
        merged.insert(key, value);
    }
    Value::Object(merged)
}

/// Lay the reconciled top-level keys over the stored section.
///
/// Stored keys missing from the update are kept in their original position.
pub fn overlay(stored: &Value, reconciled: Value) -> Value {
    match (stored, reconciled) {
        (Value::Object(stored), Value::Object(reconciled)) => {
            let mut merged = stored.clone();
            merged.extend(reconciled);
            Value::Object(merged)
        }
        (_, reconciled) => reconciled,
    }
}

/// Reconcile a section update and overlay it on the stored section.
pub fn merge_section(update: Value, stored: &Value) -> Value {
    overlay(stored, reconcile(update, stored))
}
