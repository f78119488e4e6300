//! Tree-based extraction strategy.

use scraper::{Html, Selector};
use tracing::debug;

use super::{dom_error, dom_success, ExtractionStrategy};
use crate::{
    error::{ExtractError, Result},
    outcome::ParsedOutcome,
    portal,
};

/// Primary strategy: parse the page into a node tree and walk it.
///
/// Success is decided by the red value markers the portal uses to flag the
/// generated application number next to its label phrase; failures are
/// assembled from alert containers. All selectors are compiled once at
/// construction.
///
/// # Examples
///
/// ```
/// use pageverdict::parser::strategies::{DomStrategy, ExtractionStrategy};
///
/// let strategy = DomStrategy::new().unwrap();
/// let html = r#"<div>আবেদন নম্বর: <span style="color:red">253754631</span></div>"#;
/// let outcome = strategy.extract(html).unwrap();
/// assert_eq!(outcome.application_id(), Some("253754631"));
/// ```
#[derive(Debug)]
pub struct DomStrategy {
    selectors: DomSelectors,
}

impl DomStrategy {
    /// Creates the tree strategy, compiling all selectors.
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: DomSelectors::compile()?,
        })
    }
}

impl ExtractionStrategy for DomStrategy {
    #[inline]
    fn name(&self) -> &'static str {
        "dom_tree"
    }

    fn extract(&self, html: &str) -> Result<ParsedOutcome> {
        let doc = Html::parse_document(html);

        if let Some(outcome) = dom_success::extract(&doc, &self.selectors) {
            debug!(
                application_id = outcome.application_id().unwrap_or_default(),
                "found application number marker"
            );
            return Ok(outcome);
        }

        let message = dom_error::extract(&doc, &self.selectors);
        Ok(ParsedOutcome::failure(message))
    }

    #[inline]
    fn priority(&self) -> u8 {
        1
    }
}

/// Compiled selectors for every page convention the tree walk touches.
#[derive(Debug)]
pub(super) struct DomSelectors {
    /// Red inline markers: application number, submission deadline.
    pub(super) value_marker: Selector,
    /// Green inline markers: confirmation fields.
    pub(super) confirm_marker: Selector,
    /// Print control lookups, in preference order.
    pub(super) print_by_id: Selector,
    pub(super) print_by_class: Selector,
    pub(super) print_by_href: Selector,
    /// Alert containers and their pieces.
    pub(super) alert: Selector,
    pub(super) span: Selector,
    pub(super) bold: Selector,
    /// Field/form validation messages outside alert containers.
    pub(super) validation: Selector,
}

impl DomSelectors {
    pub(super) fn compile() -> Result<Self> {
        Ok(Self {
            value_marker: compile(portal::VALUE_MARKER_SELECTOR)?,
            confirm_marker: compile(portal::CONFIRM_MARKER_SELECTOR)?,
            print_by_id: compile("#printApplication")?,
            print_by_class: compile("a.print")?,
            print_by_href: compile(r#"a[href*="/print/"]"#)?,
            alert: compile(r#"[class*="alert"]"#)?,
            span: compile("span")?,
            bold: compile("b, strong")?,
            validation: compile(".validation-error, .field-error, .form-error")?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ExtractError::InvalidSelector(format!("{selector}: {e}")))
}
