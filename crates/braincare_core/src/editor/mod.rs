//! Authoring form model.
//!
//! Store writes are full-record replacements, so the editor rebuilds a
//! complete `Article` from its form state before saving.

pub mod draft;
