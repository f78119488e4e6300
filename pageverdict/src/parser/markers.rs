//! Shared marker scan primitive.
//!
//! The portal repeats one layout pattern everywhere a value matters: a
//! colored inline marker holding the value, sitting inside an element whose
//! text carries a fixed label phrase. Success, confirmation and deadline
//! extraction are all instances of this one scan with different selectors
//! and labels.

use scraper::{ElementRef, Html, Selector};

use crate::portal::collapse_ws;

/// Returns the trimmed text of the first marker element (in document
/// order) whose enclosing element's text contains one of the given label
/// substrings.
///
/// Label matching is case-insensitive; the labels themselves must be
/// lowercase. Markers with empty or whitespace-only text are skipped, so a
/// returned value is never empty. Ties between matching markers are broken
/// by document order alone.
pub(crate) fn first_labeled_value(
    doc: &Html,
    marker: &Selector,
    labels: &[&str],
) -> Option<String> {
    for element in doc.select(marker) {
        let value = collapse_ws(&element.text().collect::<String>());
        if value.is_empty() {
            continue;
        }
        let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let context = collapse_ws(&parent.text().collect::<String>()).to_lowercase();
        if labels.iter().any(|label| context.contains(label)) {
            return Some(value);
        }
    }
    None
}

/// Collects the collapsed text of an element, for context checks.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_ws(&element.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_marker() -> Selector {
        Selector::parse(crate::portal::VALUE_MARKER_SELECTOR).unwrap()
    }

    #[test]
    fn test_first_match_in_document_order_wins() {
        let doc = Html::parse_document(
            r#"
            <div>আবেদন নম্বর: <span style="color:red">111</span></div>
            <div>আবেদন নম্বর: <span style="color:red">222</span></div>
            "#,
        );
        let value = first_labeled_value(&doc, &value_marker(), &["আবেদন নম্বর"]);
        assert_eq!(value.as_deref(), Some("111"));
    }

    #[test]
    fn test_unlabeled_marker_is_skipped() {
        let doc = Html::parse_document(
            r#"
            <div>something else: <span style="color:red">111</span></div>
            <div>আবেদন নম্বর: <span style="color:red">222</span></div>
            "#,
        );
        let value = first_labeled_value(&doc, &value_marker(), &["আবেদন নম্বর"]);
        assert_eq!(value.as_deref(), Some("222"));
    }

    #[test]
    fn test_empty_marker_is_skipped() {
        let doc = Html::parse_document(
            r#"<div>আবেদন নম্বর: <span style="color:red">   </span></div>"#,
        );
        let value = first_labeled_value(&doc, &value_marker(), &["আবেদন নম্বর"]);
        assert_eq!(value, None);
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let doc = Html::parse_document(
            r#"<div>Office Name: <span style="color:green">Dhaka North</span></div>"#,
        );
        let marker = Selector::parse(crate::portal::CONFIRM_MARKER_SELECTOR).unwrap();
        let value = first_labeled_value(&doc, &marker, &["office"]);
        assert_eq!(value.as_deref(), Some("Dhaka North"));
    }

    #[test]
    fn test_whitespace_in_value_is_collapsed() {
        let doc = Html::parse_document(
            r#"<div>আবেদন নম্বর: <span style="color:red">
                253754631
            </span></div>"#,
        );
        let value = first_labeled_value(&doc, &value_marker(), &["আবেদন নম্বর"]);
        assert_eq!(value.as_deref(), Some("253754631"));
    }
}
