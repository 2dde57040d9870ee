//! Concurrent signal gathering
//!
//! All sources run at once, each under its own timeout. A failing or slow
//! source only marks its own signal absent.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;

use crate::observability::{log_event_with_fields, Event};

use super::errors::SignalError;
use super::excerpt::{excerpt, DEFAULT_EXCERPT_CHARS};
use super::report::{SignalOutcome, SignalReport};
use super::source::{SignalKind, SignalSource};

/// Default per-source timeout
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_millis(3000);

/// Runs a fixed set of sources
#[derive(Clone)]
pub struct SignalGatherer {
    sources: Vec<Arc<dyn SignalSource>>,
    unconfigured: Vec<SignalKind>,
    timeout: Duration,
    excerpt_chars: usize,
}

impl Default for SignalGatherer {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_TIMEOUT)
    }
}

impl SignalGatherer {
    /// Gatherer with no sources
    pub fn new(timeout: Duration) -> Self {
        Self {
            sources: Vec::new(),
            unconfigured: Vec::new(),
            timeout,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Add a source
    pub fn with_source(mut self, source: impl SignalSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Record a kind that has no source; reported absent on every round
    pub fn with_unconfigured(mut self, kind: SignalKind) -> Self {
        self.unconfigured.push(kind);
        self
    }

    /// Set the excerpt length
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetch every source concurrently.
    pub async fn gather(&self) -> SignalReport {
        let fetches = self.sources.iter().map(|s| self.fetch_one(s.as_ref()));
        let mut outcomes = join_all(fetches).await;

        outcomes.extend(
            self.unconfigured
                .iter()
                .map(|kind| SignalOutcome::absent(*kind, &SignalError::NotConfigured, 0)),
        );

        SignalReport::new(outcomes)
    }

    async fn fetch_one(&self, source: &dyn SignalSource) -> SignalOutcome {
        let kind = source.kind();
        let start = Instant::now();

        let result = match tokio::time::timeout(self.timeout, source.fetch()).await {
            Ok(Ok(body)) => {
                let text = excerpt(&body, self.excerpt_chars);
                if text.is_empty() {
                    Err(SignalError::Empty)
                } else {
                    Ok(text)
                }
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SignalError::Timeout(self.timeout.as_millis() as u64)),
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let elapsed = elapsed_ms.to_string();

        match result {
            Ok(text) => {
                log_event_with_fields(
                    Event::SignalFetched,
                    &[("kind", kind.as_str()), ("elapsed_ms", elapsed.as_str())],
                );
                SignalOutcome::present(kind, text, elapsed_ms)
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::SignalFailed,
                    &[
                        ("code", e.code()),
                        ("elapsed_ms", elapsed.as_str()),
                        ("kind", kind.as_str()),
                        ("reason", reason.as_str()),
                    ],
                );
                SignalOutcome::absent(kind, &e, elapsed_ms)
            }
        }
    }
}
