use dayboard_core::{
    messages, validate_label, validate_project, validate_record, validate_task, EntityKind,
    IssueKind, Value,
};
use serde_json::json;

fn record(value: serde_json::Value) -> Value {
    Value::from(value)
}

#[test]
fn empty_task_only_reports_missing_title() {
    let issues = validate_task(&record(json!({})));
    assert_eq!(messages(&issues), vec!["Task title is required"]);
    assert_eq!(issues[0].field, "title");
    assert_eq!(issues[0].kind, IssueKind::MissingRequired);
    assert_eq!(issues[0].entity, EntityKind::Task);
}

#[test]
fn task_issues_accumulate_in_rule_order() {
    let issues = validate_task(&record(json!({"priority": 9, "dueDate": "not-a-date"})));
    assert_eq!(
        messages(&issues),
        vec![
            "Task title is required",
            "Priority must be between 1 and 5",
            "Invalid due date",
        ]
    );
}

#[test]
fn all_task_rules_can_fire_together() {
    let issues = validate_task(&record(json!({
        "title": 42,
        "priority": "high",
        "dueDate": true,
        "labels": "work"
    })));
    let kinds: Vec<IssueKind> = issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::MissingRequired,
            IssueKind::OutOfRange,
            IssueKind::InvalidDate,
            IssueKind::NotASequence,
        ]
    );
    assert_eq!(messages(&issues)[3], "Labels must be an array");
}

#[test]
fn valid_tasks_pass() {
    assert!(validate_task(&record(json!({"title": "Buy milk", "priority": 3}))).is_empty());
    assert!(validate_task(&record(json!({
        "title": "Dentist",
        "priority": 1,
        "dueDate": "2024-02-29T08:15:00Z",
        "labels": ["health", 3, null]
    })))
    .is_empty());
    assert!(validate_task(&record(json!({"title": "Epoch", "dueDate": 1700000000000_i64})))
        .is_empty());
}

#[test]
fn blank_or_non_text_title_is_missing() {
    for title in [json!("   "), json!(null), json!(["a"]), json!({"text": "a"})] {
        let issues = validate_task(&record(json!({"title": title})));
        assert_eq!(messages(&issues), vec!["Task title is required"]);
    }
}

#[test]
fn cleared_optional_task_fields_are_not_invalid() {
    let issues = validate_task(&record(json!({
        "title": "Water plants",
        "priority": null,
        "dueDate": null,
        "labels": null
    })));
    assert!(issues.is_empty());
}

#[test]
fn absent_optional_fields_are_not_invalid() {
    let task = Value::from([
        ("title", Value::from("Call mom")),
        ("priority", Value::Undefined),
        ("dueDate", Value::Undefined),
    ]);
    assert!(validate_task(&task).is_empty());
}

#[test]
fn impossible_calendar_date_is_rejected() {
    let issues = validate_task(&record(json!({"title": "Pay rent", "dueDate": "2024-02-30"})));
    assert_eq!(messages(&issues), vec!["Invalid due date"]);
    assert!(validate_task(&record(json!({"title": "Pay rent", "dueDate": "2024-02-29"})))
        .is_empty());
}

#[test]
fn priority_edges() {
    for ok in [json!(1), json!(5), json!(4.5)] {
        assert!(validate_task(&record(json!({"title": "t", "priority": ok}))).is_empty());
    }
    for bad in [json!(0), json!(6), json!(-3), json!("3")] {
        let issues = validate_task(&record(json!({"title": "t", "priority": bad})));
        assert_eq!(messages(&issues), vec!["Priority must be between 1 and 5"]);
    }
}

#[test]
fn projects() {
    assert!(validate_project(&record(json!({"name": "Home"}))).is_empty());
    assert!(validate_project(&record(json!({"name": "Home", "color": "#00ff88"}))).is_empty());
    assert_eq!(
        messages(&validate_project(&record(json!({"name": "", "color": 5})))),
        vec!["Project name is required", "Project color must be a string"]
    );
}

#[test]
fn labels() {
    assert!(validate_label(&record(json!({"name": "urgent", "color": null}))).is_empty());
    assert_eq!(
        messages(&validate_label(&record(json!({"color": ["red"]})))),
        vec!["Label name is required", "Label color must be a string"]
    );
}

#[test]
fn non_mapping_record_behaves_as_empty() {
    assert_eq!(
        messages(&validate_project(&Value::from("Home"))),
        vec!["Project name is required"]
    );
    assert_eq!(
        messages(&validate_label(&Value::Null)),
        vec!["Label name is required"]
    );
}

#[test]
fn validate_record_dispatches_by_kind() {
    let input = record(json!({}));
    assert_eq!(
        messages(&validate_record(EntityKind::Task, &input)),
        vec!["Task title is required"]
    );
    assert_eq!(
        messages(&validate_record(EntityKind::Project, &input)),
        vec!["Project name is required"]
    );
    assert_eq!(
        messages(&validate_record(EntityKind::Label, &input)),
        vec!["Label name is required"]
    );
}

#[test]
fn validation_does_not_mutate_input() {
    let input = record(json!({"title": "  padded  ", "labels": [" a "]}));
    let snapshot = input.clone();
    let _ = validate_task(&input);
    assert_eq!(input, snapshot);
}
