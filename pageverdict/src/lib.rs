//! # pageverdict
//!
//! An outcome interpretation engine for portal submission response pages.
//!
//! The upstream government portal answers a form submission with a rendered
//! HTML page and nothing else: no status code, no API. The only signals are
//! layout conventions in the markup, with wording in two languages. This
//! crate classifies that page into a structured verdict:
//!
//! - `Success` with the assigned application number, an absolute link to
//!   the printable copy when one is offered, and best-effort confirmation
//!   details
//! - `Failure` with a human-readable reason, never empty
//!
//! Extraction is layered: a structured tree walk runs first, and a textual
//! pattern fallback takes over when the tree walk fails outright. No input
//! makes the engine panic or return an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use pageverdict::interpret;
//!
//! let page = r#"
//!     <div>আবেদন নম্বর: <span style="color:red">253754631</span></div>
//!     <a class="print" href="/print/253754631">Print</a>
//! "#;
//!
//! let outcome = interpret(page, "birth_registration");
//! assert!(outcome.is_success());
//! assert_eq!(outcome.application_id(), Some("253754631"));
//! assert_eq!(
//!     outcome.print_link(),
//!     Some("https://bdris.gov.bd/print/253754631")
//! );
//! ```
//!
//! ## Advanced Usage
//!
//! For control over which strategies run:
//!
//! ```rust
//! use pageverdict::parser::{
//!     strategies::{ExtractionStrategy, RegexFallbackStrategy},
//!     OutcomeParser,
//! };
//!
//! // Force the textual fallback, e.g. to compare it against the tree walk.
//! let strategies: Vec<Box<dyn ExtractionStrategy>> =
//!     vec![Box::new(RegexFallbackStrategy::new())];
//! let parser = OutcomeParser::with_strategies(strategies);
//! let outcome = parser.interpret("<p>nothing here</p>", "");
//! assert!(!outcome.is_success());
//! ```

pub mod error;
pub mod outcome;
pub mod parser;
pub mod portal;

pub use outcome::{AdditionalInfo, ParsedOutcome};
pub use parser::OutcomeParser;

/// Interprets one submission response page with the default strategies.
///
/// This is the main entry point. `response_type_hint` names the form
/// variant that was submitted; it is advisory only in this version.
///
/// Every input, including empty or truncated markup, terminates in exactly
/// one [`ParsedOutcome`] variant; this function never panics.
///
/// # Examples
///
/// ```
/// use pageverdict::interpret;
///
/// let outcome = interpret("", "birth_registration");
/// assert!(!outcome.is_success());
/// assert!(!outcome.error_message().unwrap().is_empty());
/// ```
pub fn interpret(html: &str, response_type_hint: &str) -> ParsedOutcome {
    OutcomeParser::new().interpret(html, response_type_hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_success() {
        let html = r#"<div>আবেদন নম্বর: <span style="color:red">123456</span></div>"#;
        let outcome = interpret(html, "birth");
        assert_eq!(outcome.application_id(), Some("123456"));
    }

    #[test]
    fn test_interpret_failure() {
        let html = r#"
            <div class="alert alert-danger">
                <strong>Error!</strong>
                <span>Invalid passport number</span>
            </div>
        "#;
        let outcome = interpret(html, "birth");
        assert_eq!(outcome.error_message(), Some("Invalid passport number"));
    }

    #[test]
    fn test_interpret_is_idempotent() {
        let html = r#"<div>আবেদন নম্বর: <span style="color:red">123456</span></div>"#;
        assert_eq!(interpret(html, "a"), interpret(html, "a"));
    }

    #[test]
    fn test_hint_does_not_alter_extraction() {
        let html = r#"<div>আবেদন নম্বর: <span style="color:red">123456</span></div>"#;
        assert_eq!(interpret(html, "birth"), interpret(html, "death"));
    }
}
