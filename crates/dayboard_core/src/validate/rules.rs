//! Rule tables for task, project and label records.

use super::{evaluate, is_valid_due_date, IssueKind, Rule, ValidationIssue};
use crate::model::entity::EntityKind;
use crate::model::value::{FieldState, Value};
use log::debug;

const PRIORITY_MIN: f64 = 1.0;
const PRIORITY_MAX: f64 = 5.0;

const TASK_RULES: &[Rule] = &[
    Rule {
        field: "title",
        kind: IssueKind::MissingRequired,
        message: "Task title is required",
        violated: missing_text,
    },
    Rule {
        field: "priority",
        kind: IssueKind::OutOfRange,
        message: "Priority must be between 1 and 5",
        violated: priority_out_of_range,
    },
    Rule {
        field: "dueDate",
        kind: IssueKind::InvalidDate,
        message: "Invalid due date",
        violated: invalid_due_date,
    },
    Rule {
        field: "labels",
        kind: IssueKind::NotASequence,
        message: "Labels must be an array",
        violated: not_a_sequence,
    },
];

const PROJECT_RULES: &[Rule] = &[
    Rule {
        field: "name",
        kind: IssueKind::MissingRequired,
        message: "Project name is required",
        violated: missing_text,
    },
    Rule {
        field: "color",
        kind: IssueKind::NotAString,
        message: "Project color must be a string",
        violated: not_a_string,
    },
];

const LABEL_RULES: &[Rule] = &[
    Rule {
        field: "name",
        kind: IssueKind::MissingRequired,
        message: "Label name is required",
        violated: missing_text,
    },
    Rule {
        field: "color",
        kind: IssueKind::NotAString,
        message: "Label color must be a string",
        violated: not_a_string,
    },
];

/// Validates a raw task record.
pub fn validate_task(record: &Value) -> Vec<ValidationIssue> {
    run(EntityKind::Task, TASK_RULES, record)
}

/// Validates a raw project record.
pub fn validate_project(record: &Value) -> Vec<ValidationIssue> {
    run(EntityKind::Project, PROJECT_RULES, record)
}

/// Validates a raw label record.
pub fn validate_label(record: &Value) -> Vec<ValidationIssue> {
    run(EntityKind::Label, LABEL_RULES, record)
}

fn run(entity: EntityKind, rules: &[Rule], record: &Value) -> Vec<ValidationIssue> {
    let issues = evaluate(entity, rules, record);
    debug!(
        "event=record_validate module=validate status={} kind={} record_type={} issue_count={}",
        if issues.is_empty() { "ok" } else { "invalid" },
        entity,
        record.type_name(),
        issues.len()
    );
    issues
}

fn missing_text(state: FieldState<'_>) -> bool {
    match state {
        FieldState::SetValue(Value::String(text)) => text.trim().is_empty(),
        _ => true,
    }
}

fn priority_out_of_range(state: FieldState<'_>) -> bool {
    match state.value() {
        Some(Value::Number(priority)) => {
            !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority.as_f64())
        }
        Some(_) => true,
        None => false,
    }
}

fn invalid_due_date(state: FieldState<'_>) -> bool {
    state.value().is_some_and(|value| !is_valid_due_date(value))
}

fn not_a_sequence(state: FieldState<'_>) -> bool {
    state
        .value()
        .is_some_and(|value| !matches!(value, Value::Sequence(_)))
}

fn not_a_string(state: FieldState<'_>) -> bool {
    state
        .value()
        .is_some_and(|value| !matches!(value, Value::String(_)))
}

#[cfg(test)]
mod tests {
    use super::{missing_text, priority_out_of_range};
    use crate::model::value::{FieldState, Value};

    #[test]
    fn missing_text_covers_unset_null_non_text_and_blank() {
        assert!(missing_text(FieldState::Unset));
        assert!(missing_text(FieldState::SetNull));
        assert!(missing_text(FieldState::SetValue(&Value::from(7_i64))));
        assert!(missing_text(FieldState::SetValue(&Value::from("   "))));
        assert!(!missing_text(FieldState::SetValue(&Value::from(" x "))));
    }

    #[test]
    fn priority_bounds_are_inclusive() {
        for ok in [1.0, 2.5, 5.0] {
            assert!(!priority_out_of_range(FieldState::SetValue(&Value::from(ok))));
        }
        for bad in [0.0, 5.01, -1.0, f64::NAN] {
            assert!(priority_out_of_range(FieldState::SetValue(&Value::from(bad))));
        }
        assert!(priority_out_of_range(FieldState::SetValue(&Value::from("3"))));
        assert!(!priority_out_of_range(FieldState::SetNull));
        assert!(!priority_out_of_range(FieldState::Unset));
    }
}
