//! Server-held signing secret.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

/// Immutable HMAC key shared by every verification in the process.
///
/// Loaded once at startup and injected; cloning shares the same allocation.
/// An empty value is representable on purpose so a missing environment
/// variable reaches the verifier and fails closed there.
#[derive(Clone)]
pub struct SessionSecret(Arc<SecretString>);

impl SessionSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Arc::new(SecretString::from(value.into())))
    }

    /// A secret that was never configured.
    pub fn unset() -> Self {
        Self::new(String::new())
    }

    /// Treats an absent value the same as an empty one.
    pub fn from_optional(value: Option<String>) -> Self {
        value.map_or_else(Self::unset, Self::new)
    }

    pub fn is_configured(&self) -> bool {
        !self.0.expose_secret().is_empty()
    }

    pub(crate) fn key(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

impl core::fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionSecret")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}
