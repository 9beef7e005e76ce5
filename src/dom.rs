//! DOM Operations Adapter
//!
//! Thin read-only layer over `dom_query` covering what the media detectors
//! need: tag tests, attribute lookups, inner markup, element children, and
//! node identity. Nothing here mutates the document.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
///
/// `None` means the attribute is absent; an empty string means it is present
/// but blank.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the first node of the selection has the given tag.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Identity of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|n| n.id)
}

/// Identity of the parent of the first node in the selection.
#[must_use]
pub fn parent_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::parent)
        .map(|p| p.id)
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Tree Navigation ===

/// Direct element children, each as its own single-node selection, in
/// document order.
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Querying ===

/// Get elements by tag name, in document order
#[inline]
#[must_use]
pub fn get_elements_by_tag_name<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    doc.select(tag)
}

/// Query single element by CSS selector, `None` when nothing matches
#[must_use]
pub fn query_selector<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
