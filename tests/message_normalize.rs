use docqa::error::DocqaError;
use docqa::models::{normalize, Message, Role};
use serde_json::{json, Value};

#[test]
fn test_normalize_drops_extra_fields() {
    let message = normalize(&json!({
        "role": "user",
        "content": "x",
        "extra": "drop me"
    }))
    .unwrap();

    assert_eq!(message, Message::user("x"));
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({"role": "user", "content": "x"})
    );
}

#[test]
fn test_normalize_rejects_non_objects() {
    for value in [
        json!("not a dict"),
        json!(["role", "user"]),
        json!(42),
        json!(true),
        Value::Null,
    ] {
        let result = normalize(&value);
        assert!(
            matches!(result, Err(DocqaError::Validation(_))),
            "expected validation error for {}",
            value
        );
    }
}

#[test]
fn test_normalize_omits_missing_content() {
    let message = normalize(&json!({"role": "assistant"})).unwrap();
    assert_eq!(message.content, None);

    let serialized = serde_json::to_value(&message).unwrap();
    assert_eq!(serialized, json!({"role": "assistant"}));
    assert!(serialized.get("content").is_none());
}

#[test]
fn test_normalize_treats_null_as_absent() {
    let message = normalize(&json!({"role": null, "content": "hello"})).unwrap();
    assert_eq!(message.role, None);
    assert_eq!(message.content.as_deref(), Some("hello"));
}

#[test]
fn test_normalize_passes_unknown_roles_through() {
    let message = normalize(&json!({"role": "tool", "content": ""})).unwrap();
    assert_eq!(message.role.as_deref(), Some("tool"));
    assert_eq!(message.content.as_deref(), Some(""));
}

#[test]
fn test_normalize_rejects_non_string_fields() {
    let result = normalize(&json!({"role": "user", "content": 7}));
    assert!(matches!(result, Err(DocqaError::Validation(_))));
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        json!({"role": "user", "content": "x", "name": "alice"}),
        json!({"content": "only content"}),
        json!({}),
    ];

    for input in inputs {
        let once = normalize(&input).unwrap();
        let twice = normalize(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_role_helpers() {
    assert!(Message::system("S").is_system());
    assert!(Message::user("q").has_role(Role::User));
    assert!(!Message::assistant("a").is_system());
    assert_eq!(Role::Assistant.to_string(), "assistant");
}
