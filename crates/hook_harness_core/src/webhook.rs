//! Webhook domain types
//!
//! Validated input types for webhook definitions. The stored record shape
//! itself lives in `record_store`; this module owns the constraints applied
//! before anything reaches a store.

use url::Url;

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;

/// Validated webhook display name
///
/// Non-empty after trimming, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebhookName(String);

impl WebhookName {
    /// Maximum accepted name length in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Create a new webhook name with validation
    ///
    /// # Errors
    /// Returns `ValidationError` if the name is empty or too long.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::too_long("name", length, Self::MAX_LENGTH));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WebhookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WebhookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated webhook target URL
///
/// Must parse as an absolute `http` or `https` URL. The original string is
/// kept verbatim; validation never rewrites what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetUrl(String);

impl TargetUrl {
    /// Create a new target URL with validation
    ///
    /// # Errors
    /// Returns `ValidationError` if the value is empty, not an absolute
    /// URL, or uses a scheme other than http/https.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();

        if url.trim().is_empty() {
            return Err(ValidationError::empty_field("url"));
        }

        let parsed = Url::parse(&url)
            .map_err(|_| ValidationError::invalid_format("url", "must be an absolute URL"))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::invalid_format(
                "url",
                "scheme must be http or https",
            ));
        }

        if parsed.host_str().is_none() {
            return Err(ValidationError::invalid_format("url", "must include a host"));
        }

        Ok(Self(url))
    }

    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TargetUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
