//! Success detection: the application number marker and the print control.

use scraper::Html;

use super::{dom::DomSelectors, dom_info};
use crate::{outcome::ParsedOutcome, parser::markers, portal};

/// Looks for the application number marker. Returns `None` when the page
/// carries no identifier, which sends the orchestration down the error
/// cascade instead.
pub(super) fn extract(doc: &Html, selectors: &DomSelectors) -> Option<ParsedOutcome> {
    let application_id = markers::first_labeled_value(
        doc,
        &selectors.value_marker,
        portal::APPLICATION_NUMBER_LABELS,
    )?;

    let print_link = find_print_link(doc, selectors);
    let additional_info = dom_info::extract(doc, selectors);

    Some(ParsedOutcome::success(
        application_id,
        print_link,
        additional_info,
    ))
}

/// Locates the retrieval control: the fixed id first, then a link with the
/// print class, then any link pointing into `/print/`. A missing control is
/// not an error; the link is simply absent.
fn find_print_link(doc: &Html, selectors: &DomSelectors) -> Option<String> {
    [
        &selectors.print_by_id,
        &selectors.print_by_class,
        &selectors.print_by_href,
    ]
    .into_iter()
    .find_map(|selector| {
        doc.select(selector)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(portal::absolutize)
    })
}
