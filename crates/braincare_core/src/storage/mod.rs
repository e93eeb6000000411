//! Key-value slot storage.
//!
//! # Responsibility
//! - Define the whole-snapshot slot contract used by the stores.
//! - Provide a durable SQLite implementation and a volatile in-memory one.
//!
//! # Invariants
//! - Writes fully replace the previous payload of a slot; there is no
//!   partial write or delta.
//! - Reading a slot that was never written yields `Ok(None)`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use sqlite::SqliteSlotStorage;

/// Durable slot holding the article collection snapshot.
pub const ARTICLES_SLOT: &str = "articles";
/// Durable slot holding the site configuration snapshot.
pub const SITE_CONFIG_SLOT: &str = "site_config";
/// Volatile slot holding the privileged session record.
pub const ADMIN_SESSION_SLOT: &str = "admin_session";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    EmptySlotName,
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptySlotName => write!(f, "slot name cannot be empty"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::EmptySlotName => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-snapshot key-value storage.
pub trait SlotStorage {
    /// Returns the raw payload stored under `name`, if any.
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>>;
    /// Replaces the payload stored under `name`.
    fn write_slot(&self, name: &str, payload: &str) -> StorageResult<()>;
    /// Removes `name`. Removing a missing slot is not an error.
    fn remove_slot(&self, name: &str) -> StorageResult<()>;
}

impl<T: SlotStorage + ?Sized> SlotStorage for &T {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(name)
    }

    fn write_slot(&self, name: &str, payload: &str) -> StorageResult<()> {
        (**self).write_slot(name, payload)
    }

    fn remove_slot(&self, name: &str) -> StorageResult<()> {
        (**self).remove_slot(name)
    }
}

fn ensure_slot_name(name: &str) -> StorageResult<()> {
    if name.trim().is_empty() {
        return Err(StorageError::EmptySlotName);
    }
    Ok(())
}
