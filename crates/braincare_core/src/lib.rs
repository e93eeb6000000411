//! Core state and persistence for the BrainCare article archive.
//! This crate is the single source of truth for catalogue invariants.

pub mod auth;
pub mod config;
pub mod db;
pub mod editor;
pub mod filter;
pub mod insight;
pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use auth::{
    AuthError, Authenticator, LoginOutcome, SessionGuard, SharedSecretAuthenticator,
};
pub use config::AppConfig;
pub use editor::draft::ArticleDraft;
pub use filter::{project, ArticleProjection, CategoryFilter};
pub use insight::{
    GeminiClient, GenerateError, GenerationRequest, Insight, InsightGenerator, InsightSource,
    InsightState, InsightTicket, InsightTracker, TextGenerator,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId, ArticleValidationError, Category};
pub use model::site_config::{HeroAlignment, SiteConfig, SiteField, ThemeConfig, ThemePatch};
pub use service::catalog_service::{CatalogService, Confirmation, ServiceError};
pub use storage::{MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError};
pub use store::{ConfigStore, RecordStore, StoreError, UpsertOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
