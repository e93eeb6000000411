//! In-memory stores synchronized to slot storage.
//!
//! # Responsibility
//! - Hold the article collection and the site configuration in memory.
//! - Write a full snapshot back to storage after every mutation.
//!
//! # Invariants
//! - Loading never fails; unreadable slots degrade to defaults.
//! - Mutations update memory first, then persist the whole snapshot.
//! - Stores are constructed once and passed by reference; there are no
//!   process-wide store globals.

use crate::model::article::ArticleValidationError;
use crate::snapshot::SnapshotError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod config_store;
pub mod record_store;

pub use config_store::{ConfigStore, CONFIG_SCHEMA_VERSION};
pub use record_store::{RecordStore, UpsertOutcome, RECORDS_SCHEMA_VERSION};

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-path error for store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Record rejected before any state change.
    Validation(ArticleValidationError),
    /// Snapshot could not be encoded.
    Encode(SnapshotError),
    /// Memory was updated but the snapshot write failed.
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "failed to persist snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ArticleValidationError> for StoreError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SnapshotError> for StoreError {
    fn from(value: SnapshotError) -> Self {
        Self::Encode(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
