//! Failure message assembly: an ordered cascade over alert markup.

use scraper::{ElementRef, Html};

use super::dom::DomSelectors;
use crate::{
    parser::markers::element_text,
    portal::{
        self, contains_error_marker, is_close_glyph, is_error_marker, strip_markers,
    },
};

/// Produces a non-empty failure message. Strategies are tried in order and
/// the first that yields content wins; when everything misses, the fixed
/// generic sentence is returned.
pub(super) fn extract(doc: &Html, selectors: &DomSelectors) -> String {
    alert_message(doc, selectors)
        .or_else(|| bold_marker_message(doc, selectors))
        .or_else(|| validation_message(doc, selectors))
        .or_else(|| failure_phrase_message(doc))
        .unwrap_or_else(|| portal::UNKNOWN_ERROR_MESSAGE.to_string())
}

/// Step 1: an alert container carrying an error marker word. The message
/// is its inline spans joined with ". ", minus the marker word and any
/// close-button glyph; if no span survives, the container's own text with
/// the markers stripped.
fn alert_message(doc: &Html, selectors: &DomSelectors) -> Option<String> {
    for alert in doc.select(&selectors.alert) {
        let full_text = element_text(alert);
        if !contains_error_marker(&full_text) {
            continue;
        }

        let parts = collect_spans(alert, selectors);
        if !parts.is_empty() {
            return Some(parts.join(". "));
        }

        let stripped = strip_markers(&full_text);
        if !stripped.is_empty() {
            return Some(stripped);
        }
    }
    None
}

/// Step 2: a bold element carrying the marker word, with the message in
/// its parent's sibling spans.
fn bold_marker_message(doc: &Html, selectors: &DomSelectors) -> Option<String> {
    for bold in doc.select(&selectors.bold) {
        if !contains_error_marker(&element_text(bold)) {
            continue;
        }
        let Some(parent) = bold.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let parts = collect_spans(parent, selectors);
        if !parts.is_empty() {
            return Some(parts.join(". "));
        }
    }
    None
}

/// Step 3: field/form validation messages anywhere in the document.
fn validation_message(doc: &Html, selectors: &DomSelectors) -> Option<String> {
    let parts: Vec<String> = doc
        .select(&selectors.validation)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(". "))
}

/// Step 4: no alert markup survived, but the visible text still carries a
/// known submission-failed phrase. Substitutes the fixed localized
/// sentence.
fn failure_phrase_message(doc: &Html) -> Option<String> {
    let text = element_text(doc.root_element()).to_lowercase();
    portal::FAILURE_PHRASES
        .iter()
        .any(|phrase| text.contains(phrase))
        .then(|| portal::SUBMISSION_FAILED_MESSAGE.to_string())
}

/// Trimmed inline-span texts under `scope`, excluding the marker word
/// itself and standalone close glyphs.
fn collect_spans(scope: ElementRef<'_>, selectors: &DomSelectors) -> Vec<String> {
    scope
        .select(&selectors.span)
        .map(element_text)
        .filter(|t| !t.is_empty() && !is_error_marker(t) && !is_close_glyph(t))
        .collect()
}
