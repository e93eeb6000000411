//! Domain model for the article archive.
//!
//! # Responsibility
//! - Define the canonical `Article` record and site/theme configuration.
//! - Provide first-run seed data and built-in defaults.
//!
//! # Invariants
//! - Every article is identified by a stable, non-empty `ArticleId`.
//! - Wire shapes use camelCase field names so existing snapshots decode.

pub mod article;
pub mod seed;
pub mod site_config;
