//! Record preparation use-case.
//!
//! # Responsibility
//! - Validate a record for its entity kind and reject it on any issue.
//! - Normalize accepted records into their storage shape.
//! - Accept JSON text for FFI/CLI callers.
//!
//! # Invariants
//! - A rejected record is never normalized.
//! - Rejection carries exactly the issues the validator reported.
//! - Caller-owned records are never mutated.

use crate::model::entity::EntityKind;
use crate::model::value::Value;
use crate::sanitize::normalizer::normalize;
use crate::validate::{validate_record, ValidationIssue};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PrepareResult<T> = Result<T, PrepareError>;

/// Failure of a preparation request.
#[derive(Debug)]
pub enum PrepareError {
    /// Input text is not valid JSON.
    InvalidJson(serde_json::Error),
    /// Record failed validation; issues are in rule order.
    Rejected {
        kind: EntityKind,
        issues: Vec<ValidationIssue>,
    },
}

impl PrepareError {
    /// Returns validation issues, or an empty slice for non-validation errors.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Rejected { issues, .. } => issues,
            Self::InvalidJson(_) => &[],
        }
    }
}

impl Display for PrepareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "invalid record json: {err}"),
            Self::Rejected { kind, issues } => {
                let joined = issues
                    .iter()
                    .map(ValidationIssue::message)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{kind} record rejected: {joined}")
            }
        }
    }
}

impl Error for PrepareError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<serde_json::Error> for PrepareError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value)
    }
}

/// Validates `record` as `kind` and returns its normalized storage shape.
///
/// # Errors
/// - `PrepareError::Rejected` when any validation rule fails.
pub fn prepare_record(kind: EntityKind, record: &Value) -> PrepareResult<Value> {
    let issues = validate_record(kind, record);
    if !issues.is_empty() {
        warn!(
            "event=record_prepare module=service status=rejected kind={} issue_count={}",
            kind,
            issues.len()
        );
        return Err(PrepareError::Rejected { kind, issues });
    }

    let normalized = normalize(record);
    info!(
        "event=record_prepare module=service status=ok kind={} issue_count=0",
        kind
    );
    Ok(normalized)
}

/// JSON-text variant of [`prepare_record`]; returns normalized JSON text.
///
/// # Errors
/// - `PrepareError::InvalidJson` when `json` does not parse.
/// - `PrepareError::Rejected` when any validation rule fails.
pub fn prepare_record_json(kind: EntityKind, json: &str) -> PrepareResult<String> {
    let record = parse_record_json(json)?;
    let prepared = prepare_record(kind, &record)?;
    Ok(to_json_string(prepared))
}

/// Validates JSON text as `kind` and returns the issues found.
///
/// # Errors
/// - `PrepareError::InvalidJson` when `json` does not parse.
pub fn validate_record_json(kind: EntityKind, json: &str) -> PrepareResult<Vec<ValidationIssue>> {
    let record = parse_record_json(json)?;
    Ok(validate_record(kind, &record))
}

/// Normalizes JSON text without validation.
///
/// # Errors
/// - `PrepareError::InvalidJson` when `json` does not parse.
pub fn normalize_record_json(json: &str) -> PrepareResult<String> {
    let record = parse_record_json(json)?;
    Ok(to_json_string(normalize(&record)))
}

/// Parses JSON text into a record value.
pub fn parse_record_json(json: &str) -> PrepareResult<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Renders a record value as compact JSON text.
pub fn to_json_string(value: Value) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_record_json, prepare_record_json, PrepareError};
    use crate::model::entity::EntityKind;

    #[test]
    fn prepare_json_returns_normalized_text() {
        let out = prepare_record_json(
            EntityKind::Label,
            r##"{"name":"  urgent ","color":"#ff0000","note":"  "}"##,
        )
        .unwrap();
        assert_eq!(out, r##"{"color":"#ff0000","name":"urgent"}"##);
    }

    #[test]
    fn malformed_json_is_reported_with_source() {
        let err = normalize_record_json("{not json").unwrap_err();
        assert!(matches!(err, PrepareError::InvalidJson(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.issues().is_empty());
    }

    #[test]
    fn rejection_message_joins_issue_text() {
        let err = prepare_record_json(EntityKind::Project, r#"{"name":"","color":5}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "project record rejected: Project name is required; Project color must be a string"
        );
    }
}
