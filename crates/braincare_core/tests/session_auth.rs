use braincare_core::auth::SessionRecord;
use braincare_core::storage::ADMIN_SESSION_SLOT;
use braincare_core::{
    AuthError, Authenticator, LoginOutcome, MemorySlotStorage, SessionGuard,
    SharedSecretAuthenticator, SlotStorage,
};
use std::time::Duration;

const HOUR_MS: i64 = 60 * 60 * 1000;

struct AllowList(Vec<&'static str>);

impl Authenticator for AllowList {
    fn verify(&self, candidate: &str) -> bool {
        self.0.iter().any(|allowed| *allowed == candidate)
    }
}

#[test]
fn correct_secret_opens_session() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default());
    assert!(!guard.is_privileged());

    assert_eq!(guard.login(Some("admin123")).unwrap(), LoginOutcome::Granted);
    assert!(guard.is_privileged());

    let raw = slots.read_slot(ADMIN_SESSION_SLOT).unwrap().unwrap();
    let record: SessionRecord = serde_json::from_str(&raw).unwrap();
    assert!(record.granted_at_ms > 0);
}

#[test]
fn wrong_secret_is_unauthorized_and_changes_nothing() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default());

    let err = guard.login(Some("letmein")).unwrap_err();
    assert!(matches!(err, AuthError::Unauthorized));
    assert_eq!(err.to_string(), "Unauthorized.");
    assert!(slots.is_empty());
    assert!(!guard.is_privileged());
}

#[test]
fn wrong_secret_does_not_end_existing_session() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default());
    guard.login(Some("admin123")).unwrap();

    assert!(guard.login(Some("nope")).is_err());
    assert!(guard.is_privileged());
}

#[test]
fn cancelled_prompt_is_a_no_op() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default());
    assert_eq!(guard.login(None).unwrap(), LoginOutcome::Cancelled);
    assert!(slots.is_empty());
}

#[test]
fn logout_clears_the_flag() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::new("s3cret"));
    guard.login(Some("s3cret")).unwrap();

    guard.logout().unwrap();
    assert!(!guard.is_privileged());
    assert!(slots.read_slot(ADMIN_SESSION_SLOT).unwrap().is_none());
}

#[test]
fn session_expires_after_ttl() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default())
        .with_ttl(Duration::from_secs(2 * 60 * 60));
    let granted_at = 1_700_000_000_000;

    guard.login_at(Some("admin123"), granted_at).unwrap();
    assert!(guard.is_privileged_at(granted_at + HOUR_MS));
    assert!(!guard.is_privileged_at(granted_at + 2 * HOUR_MS));
    assert!(slots.is_empty(), "expired record is cleared");
}

#[test]
fn corrupt_session_record_is_not_privileged() {
    let slots = MemorySlotStorage::new();
    slots.write_slot(ADMIN_SESSION_SLOT, "true").unwrap();
    let guard = SessionGuard::new(&slots, SharedSecretAuthenticator::default());

    assert!(!guard.is_privileged());
    assert!(slots.is_empty());
}

#[test]
fn authenticator_is_swappable() {
    let slots = MemorySlotStorage::new();
    let guard = SessionGuard::new(&slots, AllowList(vec!["alice-key", "bob-key"]));

    assert!(guard.login(Some("admin123")).is_err());
    assert_eq!(guard.login(Some("bob-key")).unwrap(), LoginOutcome::Granted);
}
