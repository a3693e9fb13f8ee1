//! Tests for the JSON file store.

use super::*;
use crate::models::{HttpMethod, InvocationStatus, LogEntryId, ResponsePayload};
use chrono::Utc;
use serde_json::json;

fn webhook(owner: &str, name: &str) -> WebhookRecord {
    WebhookRecord {
        id: WebhookId::new(),
        owner_id: owner.to_string(),
        name: name.to_string(),
        url: "https://example.com/hook".to_string(),
        method: HttpMethod::Post,
        created_at: Utc::now(),
    }
}

fn log_entry(owner: &str, webhook_id: WebhookId) -> InvocationLogRecord {
    InvocationLogRecord {
        id: LogEntryId::new(),
        webhook_id,
        owner_id: owner.to_string(),
        request_payload: json!({}),
        response_payload: ResponsePayload::Text("ok".to_string()),
        status: InvocationStatus::Success,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"))
        .await
        .unwrap();
    assert!(store.list_for_owner("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = JsonFileStore::open(&path).await;
    assert!(matches!(result, Err(StorageError::ReadFailed(_))));
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let record = webhook("user-1", "durable");
    let webhook_id = record.id;
    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.insert(record.clone()).await.unwrap();
        store
            .append(log_entry("user-1", webhook_id))
            .await
            .unwrap();
    }

    let reopened = JsonFileStore::open(&path).await.unwrap();
    let listed = reopened.list_for_owner("user-1").await.unwrap();
    assert_eq!(listed, vec![record]);

    let logs = reopened.for_webhook("user-1", webhook_id, 10).await.unwrap();
    assert_eq!(logs.len(), 1);
}

#[tokio::test]
async fn test_delete_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let record = webhook("user-1", "doomed");
    let id = record.id;
    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.insert(record).await.unwrap();
        let removed = store.delete_for_owner("user-1", id).await.unwrap();
        assert!(removed.is_some());
    }

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert!(reopened.list_for_owner("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_logs_survive_webhook_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"))
        .await
        .unwrap();

    let record = webhook("user-1", "audited");
    let webhook_id = record.id;
    store.insert(record).await.unwrap();
    store
        .append(log_entry("user-1", webhook_id))
        .await
        .unwrap();
    store.delete_for_owner("user-1", webhook_id).await.unwrap();

    let logs = store.for_webhook("user-1", webhook_id, 10).await.unwrap();
    assert_eq!(logs.len(), 1);
}

#[tokio::test]
async fn test_owner_scoping_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"))
        .await
        .unwrap();

    store.insert(webhook("user-1", "mine")).await.unwrap();
    store.insert(webhook("user-2", "theirs")).await.unwrap();

    let listed = store.list_for_owner("user-2").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "theirs");
}
