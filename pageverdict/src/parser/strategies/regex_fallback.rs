//! Textual fallback strategy.
//!
//! Mirrors the tree walk using string patterns over the raw markup, for
//! pages so mangled that tree traversal gave up. Patterns are anchored and
//! non-backtracking-heavy; any miss degrades to "not found" or the generic
//! message, never to an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractionStrategy;
use crate::{
    error::Result,
    outcome::ParsedOutcome,
    portal::{self, collapse_ws, is_close_glyph, is_error_marker},
};

/// Strips residual tags out of a captured fragment.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Last-resort strategy: pattern matching on the raw page string.
///
/// # Examples
///
/// ```
/// use pageverdict::parser::strategies::{ExtractionStrategy, RegexFallbackStrategy};
///
/// let strategy = RegexFallbackStrategy::new();
/// // Unclosed div, but the marker pattern still reads.
/// let html = r#"<div>আবেদন নম্বর: <span style="color:red">253754631</span>"#;
/// let outcome = strategy.extract(html).unwrap();
/// assert_eq!(outcome.application_id(), Some("253754631"));
/// ```
#[derive(Debug, Clone)]
pub struct RegexFallbackStrategy {
    /// Label phrase directly followed by a red-styled inline element.
    application_id_re: Regex,
    /// Any anchor whose href contains "print".
    print_link_re: Regex,
    /// Alert container block; capture is the inner markup.
    alert_block_re: Regex,
    /// Inline span directly after the bold error marker.
    bold_then_span_re: Regex,
    /// Every inline span, for the broader sweep.
    span_re: Regex,
}

impl Default for RegexFallbackStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexFallbackStrategy {
    /// Creates the fallback strategy. All patterns are literals, compiled
    /// once here.
    pub fn new() -> Self {
        let application_id_re = Regex::new(
            r#"(?is)(?:আবেদন\s*ন(?:ম্ব|াম্বা)র|application\s*number)[^<]{0,120}<(?:span|font|b)[^>]*red[^>]*>\s*([^<]*?)\s*</"#,
        )
        .unwrap();
        let print_link_re =
            Regex::new(r#"(?is)<a[^>]*href\s*=\s*["']([^"']*print[^"']*)["']"#).unwrap();
        let alert_block_re = Regex::new(
            r#"(?is)<(?:div|p)[^>]*class\s*=\s*["'][^"']*alert[^"']*["'][^>]*>(.*?)</(?:div|p)>"#,
        )
        .unwrap();
        let bold_then_span_re = Regex::new(
            r#"(?is)<(?:b|strong)[^>]*>\s*(?:error|ত্রুটি)\s*!?\s*</(?:b|strong)>\s*<span[^>]*>(.*?)</span>"#,
        )
        .unwrap();
        let span_re = Regex::new(r"(?is)<span[^>]*>(.*?)</span>").unwrap();

        Self {
            application_id_re,
            print_link_re,
            alert_block_re,
            bold_then_span_re,
            span_re,
        }
    }

    /// Matches the application number; empty captures count as not found.
    fn match_application_id(&self, html: &str) -> Option<String> {
        let capture = self.application_id_re.captures(html)?;
        let id = collapse_ws(capture.get(1)?.as_str());
        (!id.is_empty()).then_some(id)
    }

    /// Matches a print anchor anywhere on the page, normalizing relative
    /// hrefs the same way the tree walk does.
    fn match_print_link(&self, html: &str) -> Option<String> {
        let capture = self.print_link_re.captures(html)?;
        Some(portal::absolutize(capture.get(1)?.as_str()))
    }

    /// Error path: the span after the bold marker first, then all spans of
    /// the alert body joined with a single space.
    fn match_error_message(&self, html: &str) -> Option<String> {
        for alert in self.alert_block_re.captures_iter(html) {
            let body = alert.get(1).map_or("", |m| m.as_str());

            if let Some(capture) = self.bold_then_span_re.captures(body) {
                let text = clean_fragment(capture.get(1).map_or("", |m| m.as_str()));
                if !text.is_empty() {
                    return Some(text);
                }
            }

            let parts: Vec<String> = self
                .span_re
                .captures_iter(body)
                .map(|c| clean_fragment(c.get(1).map_or("", |m| m.as_str())))
                .filter(|t| !t.is_empty() && !is_error_marker(t) && !is_close_glyph(t))
                .collect();
            if !parts.is_empty() {
                return Some(parts.join(" "));
            }
        }
        None
    }
}

impl ExtractionStrategy for RegexFallbackStrategy {
    #[inline]
    fn name(&self) -> &'static str {
        "regex_fallback"
    }

    fn extract(&self, html: &str) -> Result<ParsedOutcome> {
        if let Some(application_id) = self.match_application_id(html) {
            let print_link = self.match_print_link(html);
            return Ok(ParsedOutcome::success(application_id, print_link, None));
        }

        let message = self
            .match_error_message(html)
            .unwrap_or_else(|| portal::UNKNOWN_ERROR_MESSAGE.to_string());
        Ok(ParsedOutcome::failure(message))
    }

    #[inline]
    fn priority(&self) -> u8 {
        2
    }
}

fn clean_fragment(fragment: &str) -> String {
    collapse_ws(&TAG_RE.replace_all(fragment, " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_from_truncated_markup() {
        let strategy = RegexFallbackStrategy::new();
        let html = r#"
            <div><div>আবেদন নম্বর: <span style="color:red">253754631</span>
            <a class="print" href="/print/253754631">Print
        "#;
        let outcome = strategy.extract(html).unwrap();
        assert_eq!(outcome.application_id(), Some("253754631"));
        assert_eq!(
            outcome.print_link(),
            Some("https://bdris.gov.bd/print/253754631")
        );
    }

    #[test]
    fn test_alternate_number_spelling() {
        let strategy = RegexFallbackStrategy::new();
        let html = r#"আবেদন নাম্বার <span style="color: red;">42</span>"#;
        let outcome = strategy.extract(html).unwrap();
        assert_eq!(outcome.application_id(), Some("42"));
    }

    #[test]
    fn test_empty_marker_is_not_success() {
        let strategy = RegexFallbackStrategy::new();
        let html = r#"আবেদন নম্বর: <span style="color:red">  </span>"#;
        let outcome = strategy.extract(html).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_error_span_after_bold_marker() {
        let strategy = RegexFallbackStrategy::new();
        let html = r#"
            <div class="alert alert-danger">
                <strong>Error!</strong> <span>Invalid passport number</span>
            </div>
        "#;
        let outcome = strategy.extract(html).unwrap();
        assert_eq!(outcome.error_message(), Some("Invalid passport number"));
    }

    #[test]
    fn test_error_spans_joined_with_space() {
        let strategy = RegexFallbackStrategy::new();
        let html = r#"
            <div class="alert">
                <span>আবেদনটি গ্রহণ করা হয়নি</span>
                <span>আবার চেষ্টা করুন</span>
                <span>×</span>
            </div>
        "#;
        let outcome = strategy.extract(html).unwrap();
        assert_eq!(
            outcome.error_message(),
            Some("আবেদনটি গ্রহণ করা হয়নি আবার চেষ্টা করুন")
        );
    }

    #[test]
    fn test_no_match_yields_generic_message() {
        let strategy = RegexFallbackStrategy::new();
        let outcome = strategy.extract("<<<<not really html>>>>").unwrap();
        assert_eq!(
            outcome.error_message(),
            Some(portal::UNKNOWN_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_never_errors_on_empty_input() {
        let strategy = RegexFallbackStrategy::new();
        let outcome = strategy.extract("").unwrap();
        assert_eq!(
            outcome.error_message(),
            Some(portal::UNKNOWN_ERROR_MESSAGE)
        );
    }
}
