//! AI commentary on articles.
//!
//! # Responsibility
//! - Talk to an external text-generation service through `TextGenerator`.
//! - Normalize every failure into fixed, displayable fallback text.
//! - Track the detail-view insight lifecycle so late results are dropped.
//!
//! # Invariants
//! - Nothing in this module mutates the record or config stores.
//! - Callers never branch on errors: every call yields an `Insight`.

mod client;
mod generator;
mod prompt;
mod tracker;

pub use client::{GeminiClient, GenerateError, GenerationRequest, TextGenerator, GEMINI_API_BASE};
pub use generator::{
    InsightGenerator, DEFAULT_INSIGHT_TIMEOUT, EXPLAIN_FALLBACK, SUMMARY_FALLBACK,
};
pub use tracker::{InsightState, InsightTicket, InsightTracker};

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSource {
    Generated,
    Fallback,
}

/// Displayable commentary text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

impl Insight {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: InsightSource::Generated,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: InsightSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == InsightSource::Fallback
    }
}

impl Display for Insight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
