//! Detail-view insight lifecycle.
//!
//! `Idle -> Loading -> Displayed | FallbackDisplayed`, re-entered whenever the
//! displayed record's id, code or content changes. Each request is keyed by
//! a ticket; results for a ticket that is no longer current are dropped.

use super::client::TextGenerator;
use super::generator::InsightGenerator;
use super::{Insight, InsightSource};
use crate::model::article::{Article, ArticleId};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsightState {
    #[default]
    Idle,
    Loading,
    Displayed(String),
    FallbackDisplayed(String),
}

impl InsightState {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Displayed(text) | Self::FallbackDisplayed(text) => Some(text),
            Self::Idle | Self::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InsightKey {
    article_id: ArticleId,
    code: String,
    content: String,
}

impl InsightKey {
    fn of(article: &Article) -> Self {
        Self {
            article_id: article.id.clone(),
            code: article.code.clone().unwrap_or_default(),
            content: article.content.clone(),
        }
    }
}

/// Handle for one in-flight insight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTicket {
    generation: u64,
    article_id: ArticleId,
    code: String,
    context: String,
}

impl InsightTicket {
    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Performs the request this ticket stands for.
    pub async fn run<G: TextGenerator>(&self, generator: &InsightGenerator<G>) -> Insight {
        generator.explain(&self.code, &self.context).await
    }
}

#[derive(Debug, Default)]
pub struct InsightTracker {
    state: InsightState,
    key: Option<InsightKey>,
    generation: u64,
}

impl InsightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InsightState {
        &self.state
    }

    /// Enters (or re-enters) the detail view of `article`.
    ///
    /// Returns a ticket when a new request should start. Articles without
    /// code stay `Idle`. Re-entering with unchanged id/code/content while a
    /// request is pending or displayed starts nothing.
    pub fn begin(&mut self, article: &Article) -> Option<InsightTicket> {
        if !article.has_code() {
            self.reset();
            return None;
        }

        let key = InsightKey::of(article);
        if self.key.as_ref() == Some(&key) && self.state != InsightState::Idle {
            return None;
        }

        self.generation += 1;
        self.state = InsightState::Loading;
        let ticket = InsightTicket {
            generation: self.generation,
            article_id: key.article_id.clone(),
            code: key.code.clone(),
            context: key.content.clone(),
        };
        self.key = Some(key);
        Some(ticket)
    }

    /// Applies a finished result. Returns `false` when the ticket is stale
    /// and the result was dropped.
    pub fn complete(&mut self, ticket: &InsightTicket, insight: Insight) -> bool {
        if ticket.generation != self.generation || self.state != InsightState::Loading {
            debug!(
                "event=insight_drop module=insight ticket_generation={} current_generation={}",
                ticket.generation, self.generation
            );
            return false;
        }

        self.state = match insight.source {
            InsightSource::Generated => InsightState::Displayed(insight.text),
            InsightSource::Fallback => InsightState::FallbackDisplayed(insight.text),
        };
        true
    }

    /// Leaves the detail view; outstanding tickets become stale.
    pub fn leave(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.key = None;
        self.state = InsightState::Idle;
    }
}
