//! Extraction strategies for interpreting a submission response page.

mod dom;
mod dom_error;
mod dom_info;
mod dom_success;
mod regex_fallback;

pub use dom::DomStrategy;
pub use regex_fallback::RegexFallbackStrategy;

use crate::{error::Result, outcome::ParsedOutcome};

/// Trait for strategies that turn a raw response page into a verdict.
///
/// Each strategy applies the full success-then-error precedence on its own:
/// a clean run always yields a `ParsedOutcome`. An `Err` means the strategy
/// could not read the document at all, and the orchestrator moves on to the
/// next strategy.
pub trait ExtractionStrategy: Send + Sync + std::fmt::Debug {
    /// Returns the name of this strategy for logging.
    fn name(&self) -> &'static str;

    /// Attempts to interpret the raw page markup.
    fn extract(&self, html: &str) -> Result<ParsedOutcome>;

    /// Returns the priority of this strategy. Lower values are tried
    /// first, so the structured tree walk runs before the textual
    /// fallback.
    fn priority(&self) -> u8;
}
