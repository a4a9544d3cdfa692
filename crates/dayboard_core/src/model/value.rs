//! Generic record value shared by normalization and validation.
//!
//! # Responsibility
//! - Model the open data domain handed to core (form payloads, storage
//!   documents) as one closed sum type.
//! - Keep "absent" and "explicitly cleared" distinguishable.
//! - Convert to and from `serde_json::Value` for JSON-facing callers.
//!
//! # Invariants
//! - `Value::Undefined` means "never set"; `Value::Null` means "cleared".
//! - A mapping key bound to `Undefined` is equivalent to a missing key.
//! - Mapping key order carries no meaning; `BTreeMap` keeps output stable.
//! - Integers stay exact integers end to end; only `Number::Float` is lossy.

use std::collections::BTreeMap;

/// Field-name keyed record body.
pub type Mapping = BTreeMap<String, Value>;

/// Any value a record field can hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent marker. Omitted from normalized output.
    #[default]
    Undefined,
    /// Explicitly cleared value. Survives normalization.
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

/// Numeric payload of a record field.
///
/// JSON integers keep their exact value instead of being widened to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    /// Only used for values above `i64::MAX`.
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Numeric value for range checks; large integers may round.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::UInt(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(number: serde_json::Number) -> Self {
        if let Some(value) = number.as_i64() {
            Self::Int(value)
        } else if let Some(value) = number.as_u64() {
            Self::UInt(value)
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Lookup result for one named field of a record.
///
/// Validators match on this instead of `Option<&Value>` so an unset field
/// and a field set to `null` can never be confused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState<'a> {
    Unset,
    SetNull,
    SetValue(&'a Value),
}

impl<'a> FieldState<'a> {
    /// Returns the concrete value when the field holds one.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::SetValue(value) => Some(value),
            Self::Unset | Self::SetNull => None,
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up a field of a mapping record.
    ///
    /// Non-mapping values behave like a mapping with no fields, so every
    /// lookup on them is `Unset`.
    pub fn field(&self, name: &str) -> FieldState<'_> {
        match self.as_mapping().and_then(|fields| fields.get(name)) {
            None | Some(Self::Undefined) => FieldState::Unset,
            Some(Self::Null) => FieldState::SetNull,
            Some(value) => FieldState::SetValue(value),
        }
    }

    /// Short type label used in diagnostics (never the value itself).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Number(Number::UInt(value)), Self::from)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// JSON has no absent marker, so this never yields `Value::Undefined`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(Number::from(number)),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Mapping(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Undefined fields and elements are skipped; a bare `Undefined` and
/// non-finite numbers become JSON `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => number_to_json(number),
            Value::String(text) => Self::String(text),
            Value::Sequence(items) => Self::Array(
                items
                    .into_iter()
                    .filter(|item| !item.is_undefined())
                    .map(Self::from)
                    .collect(),
            ),
            Value::Mapping(fields) => Self::Object(
                fields
                    .into_iter()
                    .filter(|(_, value)| !value.is_undefined())
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(number: Number) -> serde_json::Value {
    match number {
        Number::Int(value) => serde_json::Value::from(value),
        Number::UInt(value) => serde_json::Value::from(value),
        Number::Float(value) => serde_json::Number::from_f64(value)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
    }
}
