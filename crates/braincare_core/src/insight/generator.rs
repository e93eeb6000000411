//! Failure-normalizing wrapper around a `TextGenerator`.

use super::client::{GenerateError, GenerationRequest, TextGenerator};
use super::prompt::{explain_prompt, refine_context, summary_prompt};
use super::Insight;
use log::{info, warn};
use std::time::{Duration, Instant};

/// Shown when an explain or refine call fails for any reason.
pub const EXPLAIN_FALLBACK: &str = "Error generating AI insights. Check API configuration.";
/// Shown when a summary call fails for any reason.
pub const SUMMARY_FALLBACK: &str = "Summarization failed.";
/// Upper bound on one generation call.
pub const DEFAULT_INSIGHT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy)]
enum InsightKind {
    Explain,
    Summary,
    Refine,
}

impl InsightKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Explain => "explain",
            Self::Summary => "summary",
            Self::Refine => "refine",
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            Self::Explain | Self::Refine => EXPLAIN_FALLBACK,
            Self::Summary => SUMMARY_FALLBACK,
        }
    }
}

/// Generates commentary text; never returns an error.
///
/// Every call is bounded by `timeout`. Network, auth, decode, empty-result
/// and timeout failures all collapse into the fixed fallback text of the
/// call variant and are logged at `warn`.
pub struct InsightGenerator<G: TextGenerator> {
    client: G,
    timeout: Duration,
}

impl<G: TextGenerator> InsightGenerator<G> {
    pub fn new(client: G) -> Self {
        Self {
            client,
            timeout: DEFAULT_INSIGHT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn client(&self) -> &G {
        &self.client
    }

    /// Short technical commentary on `code` in the light of `context`.
    pub async fn explain(&self, code: &str, context: &str) -> Insight {
        let request = GenerationRequest::new(explain_prompt(code, context)).with_thinking_budget(0);
        self.run(InsightKind::Explain, &request).await
    }

    /// Two-sentence summary of an article body.
    pub async fn summarize(&self, content: &str) -> Insight {
        let request = GenerationRequest::new(summary_prompt(content));
        self.run(InsightKind::Summary, &request).await
    }

    /// Rewritten draft body. A fallback result must not replace the draft.
    pub async fn refine(&self, code: &str, content: &str) -> Insight {
        let context = refine_context(content);
        let request = GenerationRequest::new(explain_prompt(code, &context)).with_thinking_budget(0);
        self.run(InsightKind::Refine, &request).await
    }

    async fn run(&self, kind: InsightKind, request: &GenerationRequest) -> Insight {
        let started_at = Instant::now();
        let outcome = match tokio::time::timeout(self.timeout, self.client.generate(request)).await {
            Ok(Ok(text)) if text.trim().is_empty() => Err(GenerateError::EmptyResponse),
            Ok(result) => result,
            Err(_) => Err(GenerateError::Timeout),
        };

        match outcome {
            Ok(text) => {
                info!(
                    "event=insight_generate module=insight kind={} status=ok duration_ms={} chars={}",
                    kind.as_str(),
                    started_at.elapsed().as_millis(),
                    text.chars().count()
                );
                Insight::generated(text.trim())
            }
            Err(err) => {
                warn!(
                    "event=insight_generate module=insight kind={} status=fallback duration_ms={} error_code={} error={}",
                    kind.as_str(),
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Insight::fallback(kind.fallback())
            }
        }
    }
}
