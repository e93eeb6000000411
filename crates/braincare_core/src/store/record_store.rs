//! Ordered article collection backed by the `articles` slot.
//!
//! # Invariants
//! - Article ids are unique within the collection.
//! - Replacing a record keeps its position; new records are prepended.
//! - Loading rejects a collection only for structural faults (decode error,
//!   version mismatch, empty or duplicate id).
//! - Every successful mutation persists the full collection.
//! - The snapshot schema version must be bumped whenever `Article` changes
//!   shape, so stale payloads fall back to seed data.

use crate::model::article::{Article, ArticleId};
use crate::model::seed::seed_articles;
use crate::snapshot::{decode_snapshot, encode_snapshot, SnapshotError};
use crate::storage::{SlotStorage, ARTICLES_SLOT};
use crate::store::StoreResult;
use log::{debug, error, info, warn};
use std::collections::HashSet;

/// Payload schema version of the `articles` slot.
pub const RECORDS_SCHEMA_VERSION: u32 = 5;

/// Result of [`RecordStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was prepended.
    Inserted,
    /// An existing record was replaced in place at this index.
    Replaced { index: usize },
}

pub struct RecordStore<S: SlotStorage> {
    storage: S,
    articles: Vec<Article>,
    revision: u64,
}

impl<S: SlotStorage> RecordStore<S> {
    /// Hydrates the store from its slot.
    ///
    /// Missing, malformed, wrong-version or structurally invalid payloads are
    /// replaced by the seed collection, which is persisted immediately. A
    /// failed seed write is logged; the in-memory seed is still served.
    pub fn load(storage: S) -> Self {
        let articles = match read_articles(&storage) {
            Ok(Some(articles)) => {
                info!(
                    "event=records_load module=store status=ok source=slot count={}",
                    articles.len()
                );
                articles
            }
            Ok(None) => {
                info!("event=records_load module=store status=seeded reason=missing");
                seed_and_persist(&storage)
            }
            Err(reason) => {
                warn!(
                    "event=records_load module=store status=seeded reason={}",
                    reason
                );
                seed_and_persist(&storage)
            }
        };

        Self {
            storage,
            articles,
            revision: 0,
        }
    }

    /// Full ordered collection. Read-only to callers.
    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Monotonic counter bumped by every mutation; used as a cache key.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the record with the same id in place, or prepends it.
    ///
    /// # Errors
    /// - `StoreError::Validation` before any state change.
    /// - `StoreError::Storage` when memory was updated but persistence failed.
    pub fn upsert(&mut self, article: Article) -> StoreResult<UpsertOutcome> {
        article.validate()?;

        let outcome = match self.articles.iter().position(|a| a.id == article.id) {
            Some(index) => {
                self.articles[index] = article;
                UpsertOutcome::Replaced { index }
            }
            None => {
                self.articles.insert(0, article);
                UpsertOutcome::Inserted
            }
        };
        self.revision += 1;
        debug!(
            "event=records_upsert module=store outcome={:?} count={}",
            outcome,
            self.articles.len()
        );

        self.persist()?;
        Ok(outcome)
    }

    /// Removes the record with `id`. Returns `false` (and writes nothing)
    /// when no such record exists.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let Some(index) = self.articles.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        self.articles.remove(index);
        self.revision += 1;
        debug!(
            "event=records_delete module=store status=ok count={}",
            self.articles.len()
        );

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> StoreResult<()> {
        write_articles(&self.storage, &self.articles).map_err(|err| {
            error!(
                "event=records_persist module=store status=error error={}",
                err
            );
            err
        })
    }
}

fn read_articles(storage: &impl SlotStorage) -> Result<Option<Vec<Article>>, String> {
    let raw = match storage.read_slot(ARTICLES_SLOT) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(None),
        Err(err) => return Err(format!("read_failed error={err}")),
    };

    decode_snapshot(&raw, RECORDS_SCHEMA_VERSION, |articles: &Vec<Article>| {
        validate_collection(articles)
    })
    .map(Some)
    .map_err(|err: SnapshotError| format!("{} error={err}", err.code()))
}

/// Structural checks only. Field formats such as `date` are enforced on
/// `upsert`, so a loose legacy value never discards the collection.
fn validate_collection(articles: &[Article]) -> Result<(), String> {
    let mut seen: HashSet<&ArticleId> = HashSet::with_capacity(articles.len());
    for article in articles {
        if article.id.trim().is_empty() {
            return Err("article with empty id".to_string());
        }
        if !seen.insert(&article.id) {
            return Err(format!("duplicate article id `{}`", article.id));
        }
    }
    Ok(())
}

fn write_articles(storage: &impl SlotStorage, articles: &[Article]) -> StoreResult<()> {
    let payload = encode_snapshot(RECORDS_SCHEMA_VERSION, &articles)?;
    storage.write_slot(ARTICLES_SLOT, &payload)?;
    Ok(())
}

fn seed_and_persist(storage: &impl SlotStorage) -> Vec<Article> {
    let seed = seed_articles();
    if let Err(err) = write_articles(storage, &seed) {
        error!(
            "event=records_seed module=store status=error error={}",
            err
        );
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::{validate_collection, RecordStore};
    use crate::model::seed::seed_articles;
    use crate::storage::MemorySlotStorage;

    #[test]
    fn duplicate_ids_fail_collection_validation() {
        let mut articles = seed_articles();
        articles[1].id = articles[0].id.clone();
        let err = validate_collection(&articles).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn loose_date_passes_collection_validation() {
        let mut articles = seed_articles();
        articles[2].date = "2024-6-3".to_string();
        assert!(validate_collection(&articles).is_ok());

        articles[0].id = " ".to_string();
        assert!(validate_collection(&articles).is_err());
    }

    #[test]
    fn revision_advances_only_on_mutation() {
        let slots = MemorySlotStorage::new();
        let mut store = RecordStore::load(&slots);
        assert_eq!(store.revision(), 0);

        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.revision(), 0);

        assert!(store.delete("1").unwrap());
        assert_eq!(store.revision(), 1);
    }
}
