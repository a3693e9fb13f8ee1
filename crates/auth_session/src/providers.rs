//! Identity provider implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::{AuthError, AuthResult, IdentityProvider, OwnerId};

#[cfg(test)]
#[path = "providers_tests.rs"]
mod tests;

/// Identity provider with a fixed owner.
///
/// Used by tests and by embedders that resolve identity elsewhere.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    owner: OwnerId,
}

impl StaticIdentityProvider {
    /// Creates a provider that always yields `owner`.
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_owner(&self) -> AuthResult<OwnerId> {
        Ok(self.owner.clone())
    }
}

/// Identity provider backed by an environment variable.
///
/// The CLI's default: the variable value is the opaque owner identifier.
/// An unset or empty variable means there is no session.
#[derive(Debug, Clone)]
pub struct EnvIdentityProvider {
    variable: String,
}

impl EnvIdentityProvider {
    /// Environment variable consulted by [`EnvIdentityProvider::default`].
    pub const DEFAULT_VARIABLE: &'static str = "HOOK_HARNESS_USER";

    /// Creates a provider reading the given environment variable.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvIdentityProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VARIABLE)
    }
}

#[async_trait]
impl IdentityProvider for EnvIdentityProvider {
    async fn current_owner(&self) -> AuthResult<OwnerId> {
        match std::env::var(&self.variable) {
            Ok(value) => {
                debug!(variable = %self.variable, "resolved owner from environment");
                OwnerId::new(value)
            }
            Err(_) => {
                debug!(variable = %self.variable, "identity variable not set");
                Err(AuthError::AuthRequired)
            }
        }
    }
}
