//! Tests for the in-memory record store.

use super::*;
use crate::models::{HttpMethod, InvocationStatus, LogEntryId, ResponsePayload};
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;

fn webhook(owner: &str, name: &str, age_seconds: i64) -> WebhookRecord {
    WebhookRecord {
        id: WebhookId::new(),
        owner_id: owner.to_string(),
        name: name.to_string(),
        url: "https://example.com/hook".to_string(),
        method: HttpMethod::Post,
        created_at: Utc::now() - Duration::seconds(age_seconds),
    }
}

fn log_entry(owner: &str, webhook_id: WebhookId, age_seconds: i64) -> InvocationLogRecord {
    InvocationLogRecord {
        id: LogEntryId::new(),
        webhook_id,
        owner_id: owner.to_string(),
        request_payload: json!({}),
        response_payload: ResponsePayload::Text("ok".to_string()),
        status: InvocationStatus::Success,
        created_at: Utc::now() - Duration::seconds(age_seconds),
    }
}

// ============================================================================
// WebhookStore
// ============================================================================

#[tokio::test]
async fn test_list_returns_newest_first() {
    let store = MemoryRecordStore::new();
    store.insert(webhook("user-1", "oldest", 30)).await.unwrap();
    store.insert(webhook("user-1", "middle", 20)).await.unwrap();
    store.insert(webhook("user-1", "newest", 10)).await.unwrap();

    let listed = store.list_for_owner("user-1").await.unwrap();
    let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let store = MemoryRecordStore::new();
    store.insert(webhook("user-1", "mine", 0)).await.unwrap();
    store.insert(webhook("user-2", "theirs", 0)).await.unwrap();

    let listed = store.list_for_owner("user-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "mine");
}

#[tokio::test]
async fn test_list_for_unknown_owner_is_empty() {
    let store = MemoryRecordStore::new();
    assert!(store.list_for_owner("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_record_and_returns_it() {
    let store = MemoryRecordStore::new();
    let record = webhook("user-1", "doomed", 0);
    let id = record.id;
    store.insert(record.clone()).await.unwrap();

    let removed = store.delete_for_owner("user-1", id).await.unwrap();
    assert_eq!(removed, Some(record));
    assert!(store.list_for_owner("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_for_wrong_owner_yields_none() {
    let store = MemoryRecordStore::new();
    let record = webhook("user-1", "mine", 0);
    let id = record.id;
    store.insert(record).await.unwrap();

    let removed = store.delete_for_owner("user-2", id).await.unwrap();
    assert_eq!(removed, None);

    // The record itself is untouched.
    assert_eq!(store.list_for_owner("user-1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_yields_none() {
    let store = MemoryRecordStore::new();
    let removed = store
        .delete_for_owner("user-1", WebhookId::new())
        .await
        .unwrap();
    assert_eq!(removed, None);
}

// ============================================================================
// InvocationLogStore
// ============================================================================

#[tokio::test]
async fn test_recent_truncates_to_limit() {
    let store = MemoryRecordStore::new();
    let webhook_id = WebhookId::new();
    for age in 0..5 {
        store
            .append(log_entry("user-1", webhook_id, age))
            .await
            .unwrap();
    }

    let records = store.recent_for_owner("user-1", 3).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_recent_is_sorted_newest_first() {
    let store = MemoryRecordStore::new();
    let webhook_id = WebhookId::new();
    store
        .append(log_entry("user-1", webhook_id, 30))
        .await
        .unwrap();
    store
        .append(log_entry("user-1", webhook_id, 10))
        .await
        .unwrap();
    store
        .append(log_entry("user-1", webhook_id, 20))
        .await
        .unwrap();

    let records = store.recent_for_owner("user-1", 10).await.unwrap();
    let mut sorted = records.clone();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    assert_eq!(records, sorted);
}

#[tokio::test]
async fn test_recent_is_scoped_to_owner() {
    let store = MemoryRecordStore::new();
    store
        .append(log_entry("user-1", WebhookId::new(), 0))
        .await
        .unwrap();
    store
        .append(log_entry("user-2", WebhookId::new(), 0))
        .await
        .unwrap();

    let records = store.recent_for_owner("user-1", 10).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].owner_id, "user-1");
}

#[tokio::test]
async fn test_for_webhook_filters_by_id() {
    let store = MemoryRecordStore::new();
    let target = WebhookId::new();
    let other = WebhookId::new();
    store.append(log_entry("user-1", target, 0)).await.unwrap();
    store.append(log_entry("user-1", other, 0)).await.unwrap();
    store.append(log_entry("user-1", target, 5)).await.unwrap();

    let records = store.for_webhook("user-1", target, 10).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.webhook_id == target));
}

#[tokio::test]
async fn test_concurrent_appends_all_land() {
    let store = Arc::new(MemoryRecordStore::new());
    let webhook_id = WebhookId::new();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.append(log_entry("user-1", webhook_id, 0)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let records = store.recent_for_owner("user-1", 100).await.unwrap();
    assert_eq!(records.len(), 10);
}
