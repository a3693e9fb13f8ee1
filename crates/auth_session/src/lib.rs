//! Session identity for HookHarness
//!
//! This crate provides the identity boundary between the core and whatever
//! authenticates users. The core never inspects credentials; it receives an
//! opaque, already-authenticated owner identifier and trusts it.
//!
//! ## Architecture
//!
//! - [`IdentityProvider`] is the interface infrastructure implements
//! - [`Session`] is the resolved identity value threaded explicitly into
//!   every core operation - there is no ambient, process-wide session
//! - When no identity can be resolved, every operation refuses uniformly
//!   with [`AuthError::AuthRequired`]

use async_trait::async_trait;

mod providers;

pub use providers::{EnvIdentityProvider, StaticIdentityProvider};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Result type for identity operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while resolving the caller's identity.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No valid session exists. Every core operation refuses with this
    /// condition rather than execute without an owner.
    #[error("Authentication required: no valid session")]
    AuthRequired,
}

/// Opaque identifier of an authenticated user.
///
/// The core treats the value as a black box: it is captured on records at
/// creation time and used as the scope filter for every read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wraps an identifier supplied by an identity provider.
    ///
    /// # Errors
    /// Returns [`AuthError::AuthRequired`] when the identifier is empty or
    /// whitespace, which no real provider ever produces.
    pub fn new(id: impl Into<String>) -> AuthResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AuthError::AuthRequired);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolved identity for one logical caller context.
///
/// Constructed from an [`IdentityProvider`] at the edge of the system and
/// passed by reference into every registry, audit, and invocation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    owner: OwnerId,
}

impl Session {
    /// Creates a session for the given owner.
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }

    /// The authenticated owner this session acts as.
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

/// Source of the current caller's identity.
///
/// Implementations decide where identity comes from: a fixed value, an
/// environment variable, or a real session/credential system.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the owner identifier for the current caller.
    ///
    /// # Errors
    /// Returns [`AuthError::AuthRequired`] when no session exists or the
    /// session has expired.
    async fn current_owner(&self) -> AuthResult<OwnerId>;

    /// Resolves a full session value for the current caller.
    ///
    /// # Errors
    /// Returns [`AuthError::AuthRequired`] when no session exists.
    async fn session(&self) -> AuthResult<Session> {
        Ok(Session::new(self.current_owner().await?))
    }
}
