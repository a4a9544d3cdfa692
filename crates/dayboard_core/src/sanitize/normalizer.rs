//! Recursive record normalizer.
//!
//! # Responsibility
//! - Drop unset fields, blank strings and containers left empty after
//!   cleaning, so stored documents never carry placeholder values.
//! - Keep explicit `null` so "cleared" survives the trip to storage.
//!
//! # Invariants
//! - `normalize(&normalize(x)) == normalize(x)`.
//! - Emptiness is judged on the cleaned child, so it propagates upward.
//! - Only nested values are pruned; a top-level container is returned even
//!   when it ends up empty, and a top-level scalar is returned unchanged.
//! - Inside sequences, blank strings and empty containers are dropped as
//!   elements while `null` elements keep their place.

use crate::model::value::{Mapping, Value};
use log::debug;

/// Returns a normalized copy of `value` ready to be persisted.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Undefined | Value::Null => Value::Null,
        Value::Sequence(items) => {
            let cleaned = clean_sequence(items);
            debug!(
                "event=record_normalize module=sanitize status=ok shape=sequence items_in={} items_out={}",
                items.len(),
                cleaned.len()
            );
            Value::Sequence(cleaned)
        }
        Value::Mapping(fields) => {
            let cleaned = clean_mapping(fields);
            debug!(
                "event=record_normalize module=sanitize status=ok shape=mapping fields_in={} fields_out={}",
                fields.len(),
                cleaned.len()
            );
            Value::Mapping(cleaned)
        }
        Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

fn clean_mapping(fields: &Mapping) -> Mapping {
    fields
        .iter()
        .filter_map(|(key, value)| clean_nested(value).map(|cleaned| (key.clone(), cleaned)))
        .collect()
}

fn clean_sequence(items: &[Value]) -> Vec<Value> {
    items.iter().filter_map(clean_nested).collect()
}

/// Cleans a value held by a parent container.
///
/// `None` means the value must be left out of the parent.
fn clean_nested(value: &Value) -> Option<Value> {
    match value {
        Value::Undefined => None,
        Value::Null => Some(Value::Null),
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
        }
        Value::Sequence(items) => {
            let cleaned = clean_sequence(items);
            (!cleaned.is_empty()).then_some(Value::Sequence(cleaned))
        }
        Value::Mapping(fields) => {
            let cleaned = clean_mapping(fields);
            (!cleaned.is_empty()).then_some(Value::Mapping(cleaned))
        }
        Value::Bool(_) | Value::Number(_) => Some(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_nested, normalize};
    use crate::model::value::Value;

    #[test]
    fn top_level_absent_becomes_null() {
        assert_eq!(normalize(&Value::Undefined), Value::Null);
        assert_eq!(normalize(&Value::Null), Value::Null);
    }

    #[test]
    fn top_level_scalars_pass_through_untrimmed() {
        assert_eq!(normalize(&Value::from("  padded  ")), Value::from("  padded  "));
        assert_eq!(normalize(&Value::from(false)), Value::from(false));
        assert_eq!(normalize(&Value::from(2.5)), Value::from(2.5));
    }

    #[test]
    fn top_level_container_is_kept_when_emptied() {
        let record = Value::from([("a", Value::from(" "))]);
        assert_eq!(normalize(&record), Value::Mapping(Default::default()));

        let list = Value::Sequence(vec![Value::Undefined]);
        assert_eq!(normalize(&list), Value::Sequence(vec![]));
    }

    #[test]
    fn nested_helper_drops_blank_and_empty() {
        assert_eq!(clean_nested(&Value::Undefined), None);
        assert_eq!(clean_nested(&Value::from("\t\n")), None);
        assert_eq!(clean_nested(&Value::Sequence(vec![Value::from("")])), None);
        assert_eq!(clean_nested(&Value::Null), Some(Value::Null));
        assert_eq!(clean_nested(&Value::from(0_i64)), Some(Value::from(0_i64)));
    }

    #[test]
    fn input_is_left_untouched() {
        let record = Value::from([("title", Value::from("  keep me  "))]);
        let snapshot = record.clone();
        let _ = normalize(&record);
        assert_eq!(record, snapshot);
    }
}
