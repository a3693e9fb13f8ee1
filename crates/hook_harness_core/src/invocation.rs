//! Webhook invocation engine.
//!
//! Performs one outbound HTTP call for a stored definition, classifies the
//! outcome, and records it in the audit log. The engine is a single-attempt
//! executor: no retries, no timeout overrides beyond transport defaults, no
//! redirect handling beyond what the client does implicitly.

use auth_session::Session;
use chrono::Utc;
use record_store::{
    HttpMethod, InvocationLogRecord, InvocationStatus, LogEntryId, ResponsePayload, WebhookRecord,
};
use tracing::{debug, info, warn};

use crate::audit::AuditLog;
use crate::errors::InvokeError;

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;

/// Executes webhook invocations and records every attempt.
///
/// Each invocation is a self-contained request/response/append sequence
/// with no shared mutable state, so concurrent invocations need no
/// coordination. The HTTP call is the sole suspension point.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use auth_session::{OwnerId, Session};
/// use hook_harness_core::{AuditLog, InvocationEngine, WebhookRegistry};
/// use record_store::{HttpMethod, MemoryRecordStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(MemoryRecordStore::new());
/// let registry = WebhookRegistry::new(store.clone());
/// let engine = InvocationEngine::new(AuditLog::new(store));
/// let session = Session::new(OwnerId::new("user-1")?);
///
/// let webhook = registry
///     .create(&session, "Test", "https://example.com/hook", HttpMethod::Post)
///     .await?;
/// let entry = engine.invoke(&session, &webhook, r#"{"ping": 1}"#).await?;
/// println!("outcome: {}", entry.status);
/// # Ok(())
/// # }
/// ```
pub struct InvocationEngine {
    /// HTTP client with transport defaults
    client: reqwest::Client,

    /// Audit log every attempt is appended to
    audit: AuditLog,
}

impl InvocationEngine {
    /// Creates an engine with a default HTTP client.
    pub fn new(audit: AuditLog) -> Self {
        Self {
            client: reqwest::Client::new(),
            audit,
        }
    }

    /// Creates an engine with a caller-supplied HTTP client.
    pub fn with_client(client: reqwest::Client, audit: AuditLog) -> Self {
        Self { client, audit }
    }

    /// Invokes a webhook once with the supplied raw payload text and
    /// returns the recorded log entry.
    ///
    /// # Behavior
    ///
    /// 1. Empty payload text means `{}`; otherwise the text must parse as
    ///    JSON. A parse failure produces an `error` entry and nothing is
    ///    sent over the network.
    /// 2. GET definitions never transmit a body, whatever the payload says;
    ///    the parsed payload is still recorded for audit.
    /// 3. Bodies are sent with `Content-Type: application/json`.
    /// 4. A response declaring a JSON content type is parsed as JSON; any
    ///    other response body is captured as raw text, valid JSON or not.
    /// 5. A 2xx status classifies as `success`; every other status class
    ///    and every transport failure classifies as `error`.
    ///
    /// Whatever happens, exactly one log entry is constructed and appended.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Unrecorded`] when the audit append fails. The
    /// network exchange may have completed; the constructed entry rides
    /// along in the error so the outcome is not lost.
    pub async fn invoke(
        &self,
        session: &Session,
        webhook: &WebhookRecord,
        raw_payload: &str,
    ) -> Result<InvocationLogRecord, InvokeError> {
        let (request_payload, parse_failure) = parse_payload(raw_payload);

        let (status, response_payload) = match parse_failure {
            Some(description) => {
                warn!(webhook_id = %webhook.id, "payload rejected, nothing sent");
                (InvocationStatus::Error, ResponsePayload::Failure(description))
            }
            None => self.execute(webhook, &request_payload).await,
        };

        let entry = InvocationLogRecord {
            id: LogEntryId::new(),
            webhook_id: webhook.id,
            owner_id: session.owner().as_str().to_string(),
            request_payload,
            response_payload,
            status,
            created_at: Utc::now(),
        };

        match self.audit.append(entry.clone()).await {
            Ok(()) => {
                info!(webhook_id = %webhook.id, status = %entry.status, "invocation recorded");
                Ok(entry)
            }
            Err(source) => Err(InvokeError::Unrecorded {
                entry: Box::new(entry),
                source,
            }),
        }
    }

    /// Sends the request and classifies the response.
    async fn execute(
        &self,
        webhook: &WebhookRecord,
        payload: &serde_json::Value,
    ) -> (InvocationStatus, ResponsePayload) {
        let request = match webhook.method {
            // GET never carries a body.
            HttpMethod::Get => self.client.get(&webhook.url),
            HttpMethod::Post => self.client.post(&webhook.url).json(payload),
        };

        debug!(webhook_id = %webhook.id, method = %webhook.method, url = %webhook.url, "sending request");
        match request.send().await {
            Ok(response) => classify_response(response).await,
            Err(err) => {
                warn!(webhook_id = %webhook.id, error = %err, "transport failure");
                (
                    InvocationStatus::Error,
                    ResponsePayload::Failure(describe_transport_error(&err)),
                )
            }
        }
    }
}

/// Parses the raw payload text.
///
/// Returns the JSON value to record as the request payload, plus a failure
/// description when the text did not parse. Empty or whitespace text stands
/// for the empty object.
fn parse_payload(raw: &str) -> (serde_json::Value, Option<String>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (serde_json::Value::Object(serde_json::Map::new()), None);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => (value, None),
        Err(err) => (
            serde_json::Value::Object(serde_json::Map::new()),
            Some(format!("invalid JSON payload: {err}")),
        ),
    }
}

/// Classifies a received response and captures its body.
///
/// The content-type branch is binary: JSON when the header says so, raw
/// text otherwise. Text bodies are never probed for JSON.
async fn classify_response(response: reqwest::Response) -> (InvocationStatus, ResponsePayload) {
    let status = if response.status().is_success() {
        InvocationStatus::Success
    } else {
        InvocationStatus::Error
    };

    let declares_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false);

    let payload = if declares_json {
        match response.json::<serde_json::Value>().await {
            Ok(value) => ResponsePayload::Json(value),
            Err(err) => ResponsePayload::Failure(format!("failed to read response body: {err}")),
        }
    } else {
        match response.text().await {
            Ok(text) => ResponsePayload::Text(text),
            Err(err) => ResponsePayload::Failure(format!("failed to read response body: {err}")),
        }
    };

    (status, payload)
}

/// Renders a transport failure as a log-worthy description.
fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("transport error: {err}")
    }
}
