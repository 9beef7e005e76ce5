//! Audio widget detection inside `<section>` elements.
//!
//! The platform renders audio players as custom elements inside a section.
//! The record keeps only the widget markup: from one character before the
//! first marker (the opening `<`) to one character after the last marker
//! (the closing `>`).

use dom_query::Selection;

use crate::dom;
use crate::patterns::{
    AUDIO_WIDGET_CLOSE, AUDIO_WIDGET_MARKER, AUDIO_WIDGET_OPEN, VOICE_WIDGET_MARKER,
};
use crate::result::{MediaKind, MediaNode};

/// Audio widget variants, each with its own marker and target tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioWidget {
    /// `mp-common-mpaudio`, tagged `"a"`.
    Standalone,
    /// `mpvoice`, tagged `"v"`.
    Voice,
}

/// Variants in emission order.
pub const AUDIO_WIDGETS: [AudioWidget; 2] = [AudioWidget::Standalone, AudioWidget::Voice];

impl AudioWidget {
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            AudioWidget::Standalone => AUDIO_WIDGET_MARKER,
            AudioWidget::Voice => VOICE_WIDGET_MARKER,
        }
    }

    /// Value stored in [`MediaNode::target`] for this variant.
    #[must_use]
    pub fn target(self) -> &'static str {
        match self {
            AudioWidget::Standalone => "a",
            AudioWidget::Voice => "v",
        }
    }
}

/// Inner markup with newlines removed and surrounding whitespace trimmed.
#[must_use]
pub fn collapse_markup(html: &str) -> String {
    html.replace('\n', "").trim().to_string()
}

/// Slice of `markup` covering every occurrence of `marker`, widened by one
/// character on each side.
///
/// The left edge clamps to the start of the string when the marker is at
/// index 0, and the right edge clamps to the end.
#[must_use]
pub fn widget_span<'a>(markup: &'a str, marker: &str) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }
    let first = markup.find(marker)?;
    let last = markup.rfind(marker)?;

    let start = markup[..first]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i);
    let after = last + marker.len();
    let end = markup[after..]
        .chars()
        .next()
        .map_or(after, |c| after + c.len_utf8());

    Some(&markup[start..end])
}

/// Audio records for one node, one per widget variant found.
///
/// Only `<section>` elements are considered. Both variants are searched in
/// the same collapsed markup, so one section can yield two records.
#[must_use]
pub fn detect_audio(sel: &Selection) -> Vec<MediaNode> {
    if !dom::is_tag(sel, "section") {
        return Vec::new();
    }
    let Some(id) = dom::node_id(sel) else {
        return Vec::new();
    };

    let markup = collapse_markup(&dom::inner_html(sel));
    AUDIO_WIDGETS
        .iter()
        .filter_map(|widget| {
            widget_span(&markup, widget.marker()).map(|span| {
                MediaNode::new(id, MediaKind::Audio, span).with_target(widget.target())
            })
        })
        .collect()
}

/// Record for a section holding nothing but an audio widget.
///
/// Matches when the collapsed inner markup starts with the widget's opening
/// tag and ends with its closing tag. The record carries the section's
/// untouched inner markup and an empty target.
#[must_use]
pub fn detect_standalone_audio(sel: &Selection) -> Option<MediaNode> {
    if !dom::is_tag(sel, "section") {
        return None;
    }
    let html = dom::inner_html(sel);
    let markup = collapse_markup(&html);
    if markup.starts_with(AUDIO_WIDGET_OPEN) && markup.ends_with(AUDIO_WIDGET_CLOSE) {
        return dom::node_id(sel).map(|id| MediaNode::new(id, MediaKind::Audio, html.to_string()));
    }
    None
}
