//! Confirmation details shown alongside the application number.

use scraper::Html;

use super::dom::DomSelectors;
use crate::{outcome::AdditionalInfo, parser::markers, portal};

/// Best-effort enrichment, success path only. Each field is an independent
/// first-match scan; the deadline shares the red value-marker convention
/// while the other three use the green confirmation markers. Returns
/// `None` when nothing at all was found.
pub(super) fn extract(doc: &Html, selectors: &DomSelectors) -> Option<AdditionalInfo> {
    let info = AdditionalInfo {
        application_type_label: markers::first_labeled_value(
            doc,
            &selectors.confirm_marker,
            portal::APPLICATION_TYPE_LABELS,
        ),
        office_name: markers::first_labeled_value(doc, &selectors.confirm_marker, portal::OFFICE_LABELS),
        phone_number: markers::first_labeled_value(doc, &selectors.confirm_marker, portal::PHONE_LABELS),
        submission_deadline: markers::first_labeled_value(
            doc,
            &selectors.value_marker,
            portal::DEADLINE_LABELS,
        ),
    };

    (!info.is_empty()).then_some(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> DomSelectors {
        DomSelectors::compile().unwrap()
    }

    #[test]
    fn test_all_fields_found() {
        let doc = Html::parse_document(
            r#"
            <p>আবেদনের ধরন: <span style="color:green">নতুন নিবন্ধন</span></p>
            <p>অফিস: <span style="color:green">Dhaka North</span></p>
            <p>মোবাইল: <span style="color:green">01712345678</span></p>
            <p>২০২৬-০৯-১৫ এর মধ্যে জমা দিন: <span style="color:red">2026-09-15</span></p>
            "#,
        );
        let info = extract(&doc, &selectors()).unwrap();
        assert_eq!(info.application_type_label.as_deref(), Some("নতুন নিবন্ধন"));
        assert_eq!(info.office_name.as_deref(), Some("Dhaka North"));
        assert_eq!(info.phone_number.as_deref(), Some("01712345678"));
        assert_eq!(info.submission_deadline.as_deref(), Some("2026-09-15"));
    }

    #[test]
    fn test_fields_are_independent() {
        let doc = Html::parse_document(
            r#"<p>অফিস: <span style="color:green">Sylhet Sadar</span></p>"#,
        );
        let info = extract(&doc, &selectors()).unwrap();
        assert_eq!(info.office_name.as_deref(), Some("Sylhet Sadar"));
        assert_eq!(info.application_type_label, None);
        assert_eq!(info.phone_number, None);
        assert_eq!(info.submission_deadline, None);
    }

    #[test]
    fn test_deadline_ignores_confirmation_markers() {
        // Deadline labels only count next to red markers.
        let doc = Html::parse_document(
            r#"<p>deadline: <span style="color:green">2026-09-15</span></p>"#,
        );
        assert!(extract(&doc, &selectors()).is_none());
    }

    #[test]
    fn test_empty_page_yields_none() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert!(extract(&doc, &selectors()).is_none());
    }
}
