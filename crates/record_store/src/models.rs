//! # Models
//!
//! Record types shared between the stores and the HookHarness core.
//!
//! These models represent the two kinds of records the system persists:
//! webhook definitions and invocation log entries. They are serializable so
//! that store implementations can persist them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Identifier of a webhook definition record.
///
/// Assigned once at creation and immutable afterwards. Log records keep the
/// id as a weak reference, so it stays meaningful after the definition has
/// been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookId(Uuid);

impl WebhookId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WebhookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WebhookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WebhookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of an invocation log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(Uuid);

impl LogEntryId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP method used when invoking a webhook.
///
/// Only GET and POST are supported. POST is the default for new definitions;
/// GET invocations never carry a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Invoke with GET; the request never carries a body.
    Get,

    /// Invoke with POST and a JSON body.
    #[default]
    Post,
}

impl HttpMethod {
    /// Returns the method as its wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

/// Outcome classification of one invocation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    /// The HTTP response carried a 2xx status.
    Success,

    /// The response carried any other status class, the transport failed,
    /// or the supplied payload never parsed.
    Error,
}

impl InvocationStatus {
    /// Returns true for [`InvocationStatus::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for InvocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What came back from an invocation attempt.
///
/// The response branch is binary: a body is parsed as JSON only when the
/// response declares a JSON content type, anything else is kept as raw text.
/// Attempts that never produced a usable response record a failure
/// description instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Parsed body of a response that declared `application/json`.
    Json(serde_json::Value),

    /// Raw body of a response with any other content type.
    Text(String),

    /// Description of why no usable response was obtained (transport
    /// failure, unreadable body, or a payload that never parsed).
    Failure(String),
}

/// A stored webhook definition.
///
/// Immutable once created; exactly one owner, and only that owner may read,
/// trigger, or delete it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRecord {
    /// Unique identifier, assigned at creation.
    pub id: WebhookId,

    /// Identifier of the user who created the definition. Never changes.
    pub owner_id: String,

    /// Display name.
    pub name: String,

    /// Absolute target URL.
    pub url: String,

    /// Method used when invoking the target.
    pub method: HttpMethod,

    /// Creation time, used for listing order.
    pub created_at: DateTime<Utc>,
}

/// One immutable record of an invocation attempt and its outcome.
///
/// Created exactly once per attempt, whatever the outcome; never updated or
/// deleted by normal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationLogRecord {
    /// Unique identifier, assigned at creation.
    pub id: LogEntryId,

    /// Definition that was invoked. May outlive the definition itself.
    pub webhook_id: WebhookId,

    /// User who triggered the call, captured at invocation time.
    pub owner_id: String,

    /// JSON value sent with the request, or `{}` when none was supplied.
    pub request_payload: serde_json::Value,

    /// What came back, or why nothing did.
    pub response_payload: ResponsePayload,

    /// Outcome classification.
    pub status: InvocationStatus,

    /// Record creation time, used for ordering.
    pub created_at: DateTime<Utc>,
}
