//! Script text aggregation.

use dom_query::{Document, Selection};

use crate::dom;

/// Text of every `<script>` element, in document order, joined by newlines.
#[must_use]
pub fn script_text(doc: &Document) -> String {
    dom::get_elements_by_tag_name(doc, "script")
        .nodes()
        .iter()
        .map(|node| dom::text_content(&Selection::from(*node)).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aggregated script text split into lines.
///
/// Empty lines are kept. A document without scripts yields a single empty
/// line.
#[must_use]
pub fn script_lines(doc: &Document) -> Vec<String> {
    script_text(doc).split('\n').map(str::to_string).collect()
}
