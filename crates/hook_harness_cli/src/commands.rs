//! Command implementations and output formatting.

use colored::Colorize;
use hook_harness_core::{
    AuditLog, HttpMethod, InvocationEngine, InvocationLogRecord, InvokeError, Session,
    WebhookId, WebhookRecord, WebhookRegistry, DEFAULT_LOG_LIMIT,
};
use tracing::warn;

use crate::errors::Error;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// One line describing a webhook definition.
fn format_webhook(record: &WebhookRecord) -> String {
    format!(
        "{}  [{}] {} -> {}",
        record.id,
        record.method,
        record.name,
        record.url
    )
}

/// Multi-line rendering of one log entry.
fn format_log_entry(record: &InvocationLogRecord) -> String {
    let request = serde_json::to_string(&record.request_payload)
        .unwrap_or_else(|_| "<unrenderable>".to_string());
    let response = serde_json::to_string(&record.response_payload)
        .unwrap_or_else(|_| "<unrenderable>".to_string());
    format!(
        "{} [{}] webhook {}\n  request:  {}\n  response: {}",
        record.created_at.to_rfc3339(),
        record.status,
        record.webhook_id,
        request,
        response
    )
}

/// Parses a webhook id argument.
pub fn parse_webhook_id(value: &str) -> Result<WebhookId, Error> {
    value
        .parse()
        .map_err(|_| Error::InvalidId(value.to_string()))
}

/// Registers a new webhook and prints the stored record.
pub async fn add(
    registry: &WebhookRegistry,
    session: &Session,
    name: &str,
    url: &str,
    method: HttpMethod,
) -> Result<(), Error> {
    let record = registry.create(session, name, url, method).await?;
    println!("{} {}", "Added".green(), format_webhook(&record));
    Ok(())
}

/// Lists the caller's webhooks, newest first.
pub async fn list(registry: &WebhookRegistry, session: &Session) -> Result<(), Error> {
    let records = registry.list(session).await?;
    if records.is_empty() {
        println!("No webhooks registered.");
        return Ok(());
    }
    for record in &records {
        println!("{}", format_webhook(record));
    }
    Ok(())
}

/// Deletes a webhook by id.
pub async fn delete(
    registry: &WebhookRegistry,
    session: &Session,
    id: &str,
) -> Result<(), Error> {
    let record = registry.delete(session, parse_webhook_id(id)?).await?;
    println!("{} {}", "Deleted".red(), format_webhook(&record));
    Ok(())
}

/// Triggers a webhook with the supplied payload text and prints the
/// recorded outcome.
///
/// A lost audit write is reported separately from the invocation outcome:
/// the call may well have reached the target even though no record of it
/// exists.
pub async fn trigger(
    registry: &WebhookRegistry,
    engine: &InvocationEngine,
    session: &Session,
    id: &str,
    payload: &str,
) -> Result<(), Error> {
    let webhook_id = parse_webhook_id(id)?;
    let webhook = registry
        .list(session)
        .await?
        .into_iter()
        .find(|record| record.id == webhook_id)
        .ok_or(hook_harness_core::RegistryError::NotFound)?;

    match engine.invoke(session, &webhook, payload).await {
        Ok(entry) => {
            let label = if entry.status.is_success() {
                "success".green()
            } else {
                "error".red()
            };
            println!("{label}");
            println!("{}", format_log_entry(&entry));
            Ok(())
        }
        Err(InvokeError::Unrecorded { entry, source }) => {
            warn!(error = %source, "audit write failed after invocation");
            println!(
                "{} the call completed with status '{}' but was not recorded",
                "warning:".yellow(),
                entry.status
            );
            Err(InvokeError::Unrecorded { entry, source }.into())
        }
        Err(other) => Err(other.into()),
    }
}

/// Prints recent log entries, optionally filtered to one webhook.
pub async fn logs(
    audit: &AuditLog,
    session: &Session,
    limit: Option<usize>,
    webhook: Option<&str>,
) -> Result<(), Error> {
    let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT);
    let records = match webhook {
        Some(id) => {
            audit
                .for_webhook(session, parse_webhook_id(id)?, limit)
                .await?
        }
        None => audit.recent(session, limit).await?,
    };

    if records.is_empty() {
        println!("No log entries.");
        return Ok(());
    }
    for record in &records {
        println!("{}", format_log_entry(record));
    }
    Ok(())
}
