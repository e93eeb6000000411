//! Write-access gate.
//!
//! # Responsibility
//! - Check user-entered secrets through the `Authenticator` seam.
//! - Track the volatile privileged-session flag (`SessionGuard`).
//!
//! # Invariants
//! - A failed check changes no persisted or in-memory state.
//! - The session flag is independent of article/config data; losing it
//!   only revokes write access.
//!
//! The shared-secret check is a simple gate, not a cryptographic scheme.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod session;

pub use session::{LoginOutcome, SessionGuard, SessionRecord, DEFAULT_SESSION_TTL};

/// Default shared secret when none is configured.
pub const DEFAULT_ADMIN_KEY: &str = "admin123";

/// Credential check used to open a privileged session.
pub trait Authenticator {
    fn verify(&self, candidate: &str) -> bool;
}

/// Plain equality against one configured secret.
#[derive(Debug, Clone)]
pub struct SharedSecretAuthenticator {
    secret: String,
}

impl SharedSecretAuthenticator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for SharedSecretAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_KEY)
    }
}

impl Authenticator for SharedSecretAuthenticator {
    fn verify(&self, candidate: &str) -> bool {
        !self.secret.is_empty() && candidate == self.secret
    }
}

#[derive(Debug)]
pub enum AuthError {
    /// Wrong secret; surfaced to the user as a blocking notice.
    Unauthorized,
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "Unauthorized."),
            Self::Storage(err) => write!(f, "session storage failed: {err}"),
            Self::Encode(err) => write!(f, "session record encoding failed: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unauthorized => None,
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Authenticator, SharedSecretAuthenticator};

    #[test]
    fn shared_secret_requires_exact_match() {
        let auth = SharedSecretAuthenticator::default();
        assert!(auth.verify("admin123"));
        assert!(!auth.verify("admin123 "));
        assert!(!auth.verify("ADMIN123"));
    }

    #[test]
    fn empty_secret_never_verifies() {
        let auth = SharedSecretAuthenticator::new("");
        assert!(!auth.verify(""));
    }
}
