//! Volatile privileged-session flag with an explicit expiry policy.

use super::{AuthError, Authenticator};
use crate::storage::{SlotStorage, ADMIN_SESSION_SLOT};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Payload of the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: Uuid,
    /// Unix epoch milliseconds.
    pub granted_at_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// The secret prompt was dismissed; nothing changed.
    Cancelled,
}

pub struct SessionGuard<S: SlotStorage, A: Authenticator> {
    storage: S,
    authenticator: A,
    ttl: Duration,
}

impl<S: SlotStorage, A: Authenticator> SessionGuard<S, A> {
    pub fn new(storage: S, authenticator: A) -> Self {
        Self {
            storage,
            authenticator,
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Opens a privileged session when `candidate` verifies.
    ///
    /// `None` models a dismissed prompt and is a no-op.
    pub fn login(&self, candidate: Option<&str>) -> Result<LoginOutcome, AuthError> {
        self.login_at(candidate, now_ms())
    }

    pub fn login_at(
        &self,
        candidate: Option<&str>,
        now_ms: i64,
    ) -> Result<LoginOutcome, AuthError> {
        let Some(candidate) = candidate else {
            return Ok(LoginOutcome::Cancelled);
        };

        if !self.authenticator.verify(candidate) {
            warn!("event=session_login module=auth status=denied");
            return Err(AuthError::Unauthorized);
        }

        let record = SessionRecord {
            token: Uuid::new_v4(),
            granted_at_ms: now_ms,
        };
        self.storage
            .write_slot(ADMIN_SESSION_SLOT, &serde_json::to_string(&record)?)?;
        info!("event=session_login module=auth status=ok");
        Ok(LoginOutcome::Granted)
    }

    /// Clears the session flag.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_slot(ADMIN_SESSION_SLOT)?;
        info!("event=session_logout module=auth status=ok");
        Ok(())
    }

    pub fn is_privileged(&self) -> bool {
        self.is_privileged_at(now_ms())
    }

    /// `true` iff a session record exists and is younger than the TTL.
    ///
    /// Expired or unreadable records are cleared.
    pub fn is_privileged_at(&self, now_ms: i64) -> bool {
        match self.current_record() {
            Some(record) if !self.is_expired(&record, now_ms) => true,
            Some(_) => {
                info!("event=session_expire module=auth status=ok");
                self.clear_quietly();
                false
            }
            None => false,
        }
    }

    fn current_record(&self) -> Option<SessionRecord> {
        let raw = match self.storage.read_slot(ADMIN_SESSION_SLOT) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("event=session_read module=auth status=error error={}", err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("event=session_read module=auth status=invalid error={}", err);
                self.clear_quietly();
                None
            }
        }
    }

    fn is_expired(&self, record: &SessionRecord, now_ms: i64) -> bool {
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(record.granted_at_ms) >= ttl_ms
    }

    fn clear_quietly(&self) {
        if let Err(err) = self.storage.remove_slot(ADMIN_SESSION_SLOT) {
            warn!("event=session_clear module=auth status=error error={}", err);
        }
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}
