//! Catalog use-case service.
//!
//! # Responsibility
//! - Serve the filtered list view and detail lookups.
//! - Gate every write behind the privileged session.
//!
//! # Invariants
//! - A refused write (not privileged, declined, incomplete) changes nothing.
//! - New articles never reuse an existing id.

use crate::auth::{AuthError, Authenticator, LoginOutcome, SessionGuard};
use crate::editor::draft::ArticleDraft;
use crate::filter::{ArticleProjection, CategoryFilter};
use crate::model::article::{new_article_id, today_iso, Article, ArticleId};
use crate::model::site_config::{SiteConfig, SiteField, ThemePatch};
use crate::storage::SlotStorage;
use crate::store::{ConfigStore, RecordStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ServiceError {
    NotPrivileged,
    /// Title and content are both required.
    IncompleteDraft,
    ArticleNotFound(ArticleId),
    Store(StoreError),
    Auth(AuthError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPrivileged => write!(f, "write access requires an admin session"),
            Self::IncompleteDraft => write!(f, "article title and content are required"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Auth(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Auth(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<AuthError> for ServiceError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

/// Explicit answer to the destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

pub struct CatalogService<S: SlotStorage, V: SlotStorage, A: Authenticator> {
    records: RecordStore<S>,
    config: ConfigStore<S>,
    session: SessionGuard<V, A>,
    projection: ArticleProjection,
    category: CategoryFilter,
    query: String,
}

impl<S: SlotStorage, V: SlotStorage, A: Authenticator> CatalogService<S, V, A> {
    pub fn new(
        records: RecordStore<S>,
        config: ConfigStore<S>,
        session: SessionGuard<V, A>,
    ) -> Self {
        Self {
            records,
            config,
            session,
            projection: ArticleProjection::new(),
            category: CategoryFilter::All,
            query: String::new(),
        }
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn site_config(&self) -> &SiteConfig {
        self.config.get()
    }

    pub fn projection(&self) -> &ArticleProjection {
        &self.projection
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the active category and query, in store order.
    pub fn visible_articles(&mut self) -> Vec<&Article> {
        self.projection.visible(
            self.records.revision(),
            self.records.list(),
            self.category,
            &self.query,
        )
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.records.get(id)
    }

    pub fn is_privileged(&self) -> bool {
        self.session.is_privileged()
    }

    pub fn login(&self, candidate: Option<&str>) -> Result<LoginOutcome, ServiceError> {
        Ok(self.session.login(candidate)?)
    }

    pub fn logout(&self) -> Result<(), ServiceError> {
        Ok(self.session.logout()?)
    }

    /// Creates (`editing = None`) or fully replaces an article from a draft.
    ///
    /// Returns the id of the saved record.
    pub fn save_draft(
        &mut self,
        draft: ArticleDraft,
        editing: Option<&str>,
    ) -> Result<ArticleId, ServiceError> {
        self.require_privileged()?;
        if !draft.can_save() {
            return Err(ServiceError::IncompleteDraft);
        }

        let existing = match editing {
            Some(id) => Some(
                self.records
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ServiceError::ArticleNotFound(id.to_string()))?,
            ),
            None => None,
        };

        let article = draft.into_article(existing.as_ref(), self.unique_new_id(), &today_iso());
        let id = article.id.clone();
        let outcome = self.records.upsert(article)?;
        info!(
            "event=article_save module=service status=ok outcome={:?}",
            outcome
        );
        Ok(id)
    }

    /// Deletes after explicit confirmation. `Declined` is a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn delete_article(
        &mut self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, ServiceError> {
        self.require_privileged()?;
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }

        let removed = self.records.delete(id)?;
        info!(
            "event=article_delete module=service status=ok removed={}",
            removed
        );
        Ok(removed)
    }

    pub fn update_theme(&mut self, patch: ThemePatch) -> Result<(), ServiceError> {
        self.require_privileged()?;
        self.config.update_theme(patch)?;
        Ok(())
    }

    pub fn edit_site_field(
        &mut self,
        field: SiteField,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        self.require_privileged()?;
        self.config.update_field(field, value)?;
        Ok(())
    }

    fn require_privileged(&self) -> Result<(), ServiceError> {
        if self.session.is_privileged() {
            Ok(())
        } else {
            Err(ServiceError::NotPrivileged)
        }
    }

    fn unique_new_id(&self) -> ArticleId {
        let base = new_article_id();
        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.records.get(&candidate).is_some() {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        candidate
    }
}
