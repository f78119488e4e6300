//! Upstream portal conventions.
//!
//! The portal renders submission outcomes as styled markup rather than
//! status codes: significant values are wrapped in colored inline markers,
//! failures live in alert containers, and all wording is bilingual
//! (Bengali / English). Everything the extractors key on is collected here
//! so a portal redesign is a one-file change.

use once_cell::sync::Lazy;
use regex::Regex;

/// Origin prepended to relative print links before they are returned.
pub const PORTAL_ORIGIN: &str = "https://bdris.gov.bd";

/// Fixed sentence returned when no extraction strategy produced any text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "অজানা ত্রুটি ঘটেছে";

/// Fixed sentence substituted when the page only carries a known
/// submission-failed phrase with no extractable detail.
pub const SUBMISSION_FAILED_MESSAGE: &str = "আবেদন জমা দেওয়া ব্যর্থ হয়েছে";

/// Inline markers the portal colors red: the application number and the
/// submission deadline.
pub const VALUE_MARKER_SELECTOR: &str = r#"span[style*="red"]"#;

/// Inline markers the portal colors green: confirmation fields
/// (application type, office, phone).
pub const CONFIRM_MARKER_SELECTOR: &str = r#"span[style*="green"]"#;

/// Label phrases that identify the application number marker.
/// The portal uses both spellings of "number".
pub const APPLICATION_NUMBER_LABELS: &[&str] = &["আবেদন নম্বর", "আবেদন নাম্বার"];

/// Label substrings for the four confirmation fields. All lowercase;
/// contexts are lowercased before matching.
pub const APPLICATION_TYPE_LABELS: &[&str] = &["আবেদনের ধরন", "application type"];
pub const OFFICE_LABELS: &[&str] = &["অফিস", "office"];
pub const PHONE_LABELS: &[&str] = &["ফোন", "মোবাইল", "phone"];
pub const DEADLINE_LABELS: &[&str] = &["এর মধ্যে", "deadline"];

/// Words the portal uses to flag an alert as an error, in either language.
pub const ERROR_MARKER_WORDS: &[&str] = &["error", "ত্রুটি"];

/// Glyphs used by dismissible alerts' close buttons.
pub const CLOSE_GLYPHS: &[&str] = &["×", "✕"];

/// Phrases that indicate a failed submission when no alert markup survives.
pub const FAILURE_PHRASES: &[&str] = &["submission failed", "আবেদন জমা ব্যর্থ", "জমা দেওয়া যায়নি"];

/// Collapses all runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrites a relative href against the portal origin. Absolute URLs pass
/// through unchanged.
pub(crate) fn absolutize(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{PORTAL_ORIGIN}{href}")
    } else {
        format!("{PORTAL_ORIGIN}/{href}")
    }
}

/// True if the text contains an error marker word in either language.
pub(crate) fn contains_error_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    ERROR_MARKER_WORDS.iter().any(|w| lower.contains(w))
}

/// True if the text is nothing but a marker word (optionally with a
/// trailing exclamation mark).
pub(crate) fn is_error_marker(text: &str) -> bool {
    let bare = text.trim().trim_end_matches('!').trim().to_lowercase();
    ERROR_MARKER_WORDS.iter().any(|w| bare == *w)
}

/// True if the text is a standalone close-button glyph.
pub(crate) fn is_close_glyph(text: &str) -> bool {
    let bare = text.trim();
    CLOSE_GLYPHS.iter().any(|g| bare == *g)
}

/// Marker words appear capitalized on the page ("Error!"), often with the
/// exclamation mark attached. Kept in sync with [`ERROR_MARKER_WORDS`].
static MARKER_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:error|ত্রুটি)\s*!?").unwrap());

/// Removes marker words and close glyphs from alert text, collapsing the
/// leftover whitespace.
pub(crate) fn strip_markers(text: &str) -> String {
    let mut out = MARKER_WORD_RE.replace_all(text, " ").into_owned();
    for glyph in CLOSE_GLYPHS {
        out = out.replace(glyph, " ");
    }
    collapse_ws(&out)
}
