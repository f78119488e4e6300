//! Orchestration of extraction strategies.

pub(crate) mod markers;
pub mod strategies;

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::{
    error::ExtractError,
    outcome::ParsedOutcome,
    portal,
};
use strategies::{DomStrategy, ExtractionStrategy, RegexFallbackStrategy};

/// Interprets submission response pages using an ordered set of
/// strategies.
///
/// The tree walk runs first; the textual fallback only governs when the
/// tree walk fails outright. Each strategy applies success-then-error
/// precedence internally, so whichever strategy completes decides the
/// verdict. No input makes `interpret` panic or error.
///
/// # Examples
///
/// ```
/// use pageverdict::OutcomeParser;
///
/// let parser = OutcomeParser::new();
/// let outcome = parser.interpret("", "birth");
/// assert!(!outcome.is_success());
/// ```
#[derive(Debug)]
pub struct OutcomeParser {
    /// Extraction strategies in priority order.
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for OutcomeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeParser {
    /// Creates a parser with the default strategies:
    /// 1. `DomStrategy` - structured tree traversal
    /// 2. `RegexFallbackStrategy` - textual patterns over the raw markup
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn ExtractionStrategy>> = Vec::new();

        match DomStrategy::new() {
            Ok(strategy) => strategies.push(Box::new(strategy)),
            // The fallback still covers extraction, so keep going.
            Err(err) => warn!(error = %err, "tree strategy unavailable"),
        }
        strategies.push(Box::new(RegexFallbackStrategy::new()));

        strategies.sort_by_key(|s| s.priority());
        Self { strategies }
    }

    /// Creates a parser with custom strategies, sorted by priority.
    pub fn with_strategies(mut strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        strategies.sort_by_key(|s| s.priority());
        Self { strategies }
    }

    /// Classifies one response page into exactly one verdict.
    ///
    /// `response_type_hint` names the submitted form variant; it is
    /// advisory only and does not alter extraction yet.
    pub fn interpret(&self, html: &str, response_type_hint: &str) -> ParsedOutcome {
        let _ = response_type_hint;

        for strategy in &self.strategies {
            match panic::catch_unwind(AssertUnwindSafe(|| strategy.extract(html))) {
                Ok(Ok(outcome)) => {
                    debug!(
                        strategy = strategy.name(),
                        success = outcome.is_success(),
                        "strategy produced a verdict"
                    );
                    return outcome;
                }
                Ok(Err(err)) => {
                    warn!(strategy = strategy.name(), error = %err, "strategy failed, trying next");
                }
                Err(payload) => {
                    let err = ExtractError::Traversal(panic_message(payload));
                    warn!(strategy = strategy.name(), error = %err, "strategy panicked, trying next");
                }
            }
        }

        ParsedOutcome::failure(portal::UNKNOWN_ERROR_MESSAGE)
    }

    /// Returns the number of strategies registered.
    #[inline]
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Returns the names of all registered strategies in priority order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
