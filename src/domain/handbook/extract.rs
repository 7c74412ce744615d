//! Extraction result assembly: full text with page markers, outline fallback.

use super::outline::{render_outline, OutlineEntry};

/// Pages scanned for table-of-contents lines when no embedded outline exists.
pub const MAX_OUTLINE_SCAN_PAGES: usize = 10;

/// Minimum heuristic line count for a usable fallback outline.
pub const MIN_OUTLINE_LINES: usize = 3;

/// Warning set when the fallback scan found too few candidate lines.
const OUTLINE_WARNING: &str =
    "Could not extract a detailed table of contents. Analysis is based on the full text.";

/// Everything the document preprocessor computes for one handbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandbookExtract {
    /// Every page's text, each prefixed with a `[Page N]` marker, in page order.
    pub full_text: String,
    /// Rendered outline, embedded or heuristic. Absent when neither worked.
    pub outline: Option<String>,
    /// Non-fatal warning when no usable outline could be derived.
    pub outline_warning: Option<String>,
    /// Number of pages in the document.
    pub page_count: usize,
}

impl HandbookExtract {
    /// Assembles the extraction result from per-page texts and the embedded
    /// outline (empty when the document has none).
    ///
    /// A non-empty embedded outline is rendered as an indented list. Otherwise
    /// the first [`MAX_OUTLINE_SCAN_PAGES`] pages are scanned line by line for
    /// table-of-contents candidates; fewer than [`MIN_OUTLINE_LINES`] matches
    /// discard the fallback entirely and set a warning instead.
    pub fn from_pages(pages: Vec<String>, embedded_outline: &[OutlineEntry]) -> Self {
        let (outline, outline_warning) = if embedded_outline.is_empty() {
            scan_for_outline(&pages)
        } else {
            (Some(render_outline(embedded_outline)), None)
        };

        let full_text = compose_full_text(&pages);

        Self {
            full_text,
            outline,
            outline_warning,
            page_count: pages.len(),
        }
    }
}

/// Concatenates page texts, each prefixed with a 1-based `[Page N]` marker.
fn compose_full_text(pages: &[String]) -> String {
    let mut full_text = String::new();
    for (index, page_text) in pages.iter().enumerate() {
        full_text.push_str(&format!("\n\n[Page {}]\n", index + 1));
        full_text.push_str(page_text);
    }
    full_text
}

/// Scans the first pages for table-of-contents lines.
///
/// Returns the fallback outline when enough candidates were found, or a
/// warning when the scan came up short.
fn scan_for_outline(pages: &[String]) -> (Option<String>, Option<String>) {
    let mut candidates = Vec::new();
    for page_text in pages.iter().take(MAX_OUTLINE_SCAN_PAGES) {
        for line in page_text.lines() {
            let clean_line = line.trim();
            if is_outline_candidate(clean_line) {
                candidates.push(clean_line.to_string());
            }
        }
    }

    if candidates.len() < MIN_OUTLINE_LINES {
        (None, Some(OUTLINE_WARNING.to_string()))
    } else {
        let mut outline = candidates.join("\n");
        outline.push('\n');
        (Some(outline), None)
    }
}

/// Classifies a trimmed line as a likely table-of-contents entry.
///
/// Matches dotted-leader lines ("Einführung ..... 7") and lines that simply
/// end in a page number.
fn is_outline_candidate(clean_line: &str) -> bool {
    if clean_line.contains("...") && clean_line.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    !clean_line.is_empty()
        && clean_line
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
        && clean_line.chars().count() > 3
}
