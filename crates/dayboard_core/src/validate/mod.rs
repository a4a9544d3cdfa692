//! Per-entity record validation.
//!
//! # Responsibility
//! - Check raw task/project/label records for required fields, field types
//!   and value ranges before they are accepted.
//! - Report every failed check as a tagged `ValidationIssue` whose message
//!   text is what the app shows verbatim.
//!
//! # Invariants
//! - Validators never mutate their input and never fail; an empty issue
//!   list is the only success signal.
//! - Every rule runs; issue order follows rule order.
//! - An optional field set to `null` counts as cleared, not invalid.

mod due_date;
mod rules;

pub use due_date::{is_valid_due_date, parse_due_date};
pub use rules::{validate_label, validate_project, validate_task};

use crate::model::entity::EntityKind;
use crate::model::value::{FieldState, Value};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Category of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Required text field is missing, not text, or blank.
    MissingRequired,
    /// Numeric field falls outside its accepted range.
    OutOfRange,
    /// Date field does not parse to a calendar date.
    InvalidDate,
    /// Field must hold a sequence.
    NotASequence,
    /// Field must hold a string.
    NotAString,
}

/// One failed check on one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub entity: EntityKind,
    /// Wire name of the offending field, e.g. `dueDate`.
    pub field: &'static str,
    pub kind: IssueKind,
    /// User-facing text; existing UI renders it verbatim.
    pub message: &'static str,
}

impl ValidationIssue {
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

/// Returns the plain message list rendered by form handlers.
pub fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| issue.message.to_string())
        .collect()
}

/// Runs the validator registered for `kind`.
pub fn validate_record(kind: EntityKind, record: &Value) -> Vec<ValidationIssue> {
    match kind {
        EntityKind::Task => validate_task(record),
        EntityKind::Project => validate_project(record),
        EntityKind::Label => validate_label(record),
    }
}

/// One ordered check in an entity rule table.
pub(crate) struct Rule {
    pub field: &'static str,
    pub kind: IssueKind,
    pub message: &'static str,
    /// Returns `true` when the field state breaks the rule.
    pub violated: fn(FieldState<'_>) -> bool,
}

pub(crate) fn evaluate(entity: EntityKind, rules: &[Rule], record: &Value) -> Vec<ValidationIssue> {
    rules
        .iter()
        .filter(|rule| (rule.violated)(record.field(rule.field)))
        .map(|rule| ValidationIssue {
            entity,
            field: rule.field,
            kind: rule.kind,
            message: rule.message,
        })
        .collect()
}
