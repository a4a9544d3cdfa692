use dayboard_core::{
    messages, prepare_record, prepare_record_json, validate_record_json, validate_task,
    EntityKind, PrepareError, Value,
};
use serde_json::json;

#[test]
fn accepted_task_is_normalized() {
    let input = Value::from(json!({"title": "  Buy milk ", "notes": ""}));
    let prepared = prepare_record(EntityKind::Task, &input).unwrap();
    assert_eq!(prepared, Value::from(json!({"title": "Buy milk"})));
}

#[test]
fn rejected_record_carries_validator_issues() {
    let input = Value::from(json!({"priority": 9, "dueDate": "not-a-date"}));
    let err = prepare_record(EntityKind::Task, &input).unwrap_err();

    match &err {
        PrepareError::Rejected { kind, issues } => {
            assert_eq!(*kind, EntityKind::Task);
            assert_eq!(issues, &validate_task(&input));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(messages(err.issues()).len(), 3);
}

#[test]
fn json_prepare_for_project() {
    let out = prepare_record_json(
        EntityKind::Project,
        r#"{"name":" Garden ","color":"green","archived":false,"meta":{"x":""}}"#,
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        json!({"name": "Garden", "color": "green", "archived": false})
    );
}

#[test]
fn json_validate_reports_issues_and_parse_errors() {
    let issues = validate_record_json(EntityKind::Label, r#"{"name":"  "}"#).unwrap();
    assert_eq!(messages(&issues), vec!["Label name is required"]);

    let err = validate_record_json(EntityKind::Label, "[").unwrap_err();
    assert!(err.to_string().starts_with("invalid record json"));
}
