//! Tests for record model types.

use super::*;
use serde_json::json;

fn sample_webhook(owner: &str) -> WebhookRecord {
    WebhookRecord {
        id: WebhookId::new(),
        owner_id: owner.to_string(),
        name: "Test".to_string(),
        url: "https://example.com/hook".to_string(),
        method: HttpMethod::Post,
        created_at: Utc::now(),
    }
}

#[test]
fn test_http_method_default_is_post() {
    assert_eq!(HttpMethod::default(), HttpMethod::Post);
}

#[test]
fn test_http_method_parses_case_insensitively() {
    assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
    assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
    assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
}

#[test]
fn test_http_method_rejects_unsupported_methods() {
    let err = "PUT".parse::<HttpMethod>().unwrap_err();
    assert!(err.contains("PUT"));

    assert!("DELETE".parse::<HttpMethod>().is_err());
    assert!("".parse::<HttpMethod>().is_err());
}

#[test]
fn test_http_method_display_matches_wire_form() {
    assert_eq!(HttpMethod::Get.to_string(), "GET");
    assert_eq!(HttpMethod::Post.to_string(), "POST");
}

#[test]
fn test_invocation_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&InvocationStatus::Success).unwrap(),
        "\"success\""
    );
    assert_eq!(
        serde_json::to_string(&InvocationStatus::Error).unwrap(),
        "\"error\""
    );
}

#[test]
fn test_invocation_status_is_success() {
    assert!(InvocationStatus::Success.is_success());
    assert!(!InvocationStatus::Error.is_success());
}

#[test]
fn test_webhook_id_round_trips_through_display() {
    let id = WebhookId::new();
    let parsed: WebhookId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_webhook_id_rejects_garbage() {
    assert!("not-a-uuid".parse::<WebhookId>().is_err());
}

#[test]
fn test_webhook_ids_are_unique() {
    assert_ne!(WebhookId::new(), WebhookId::new());
    assert_ne!(LogEntryId::new(), LogEntryId::new());
}

#[test]
fn test_webhook_record_serde_round_trip() {
    let record = sample_webhook("user-1");
    let serialized = serde_json::to_string(&record).unwrap();
    let deserialized: WebhookRecord = serde_json::from_str(&serialized).unwrap();
    assert_eq!(record, deserialized);
}

#[test]
fn test_http_method_serializes_uppercase() {
    let record = sample_webhook("user-1");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["method"], json!("POST"));
}

#[test]
fn test_response_payload_kinds_are_distinguishable() {
    let parsed = ResponsePayload::Json(json!({"ok": true}));
    let raw = ResponsePayload::Text("{\"ok\": true}".to_string());
    assert_ne!(parsed, raw);

    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["kind"], json!("json"));
}

#[test]
fn test_log_record_serde_round_trip() {
    let record = InvocationLogRecord {
        id: LogEntryId::new(),
        webhook_id: WebhookId::new(),
        owner_id: "user-1".to_string(),
        request_payload: json!({"hello": "world"}),
        response_payload: ResponsePayload::Text("ok".to_string()),
        status: InvocationStatus::Success,
        created_at: Utc::now(),
    };

    let serialized = serde_json::to_string(&record).unwrap();
    let deserialized: InvocationLogRecord = serde_json::from_str(&serialized).unwrap();
    assert_eq!(record, deserialized);
}
