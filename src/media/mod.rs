//! Media node collection over a document subtree.
//!
//! The walker visits every element below the root exactly once, parent
//! before children, children in document order. Each visited element is
//! handed to the image/background classifier, the audio detector, and the
//! video placeholder detector, in that order. The root itself is not
//! classified.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::result::MediaNode;

pub mod audio;
pub mod classify;
pub mod style;
pub mod video;

pub use audio::{detect_audio, detect_standalone_audio, AudioWidget};
pub use classify::{classify_node, NodeRule, NODE_RULES};
pub use style::{split_background, split_style, split_svg_background, StyleSplit};
pub use video::detect_video_placeholder;

/// Visits every element descendant of `root` in pre-order.
///
/// Uses an explicit stack, so deeply nested markup cannot exhaust the call
/// stack.
pub fn walk_descendants<'a>(root: &Selection<'a>, mut visit: impl FnMut(&Selection<'a>)) {
    let mut stack: Vec<Selection<'a>> = dom::children(root);
    stack.reverse();

    while let Some(node) = stack.pop() {
        visit(&node);
        let mut children = dom::children(&node);
        children.reverse();
        stack.extend(children);
    }
}

/// Collects media records below `root` with every detector enabled.
///
/// # Example
///
/// ```rust
/// use rs_article_media::{collect_media, dom, MediaKind};
///
/// let doc = dom::parse(r#"<div id="c"><p><img data-src="a.png"></p></div>"#);
/// let nodes = collect_media(&doc.select("#c"));
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].kind, MediaKind::Image);
/// assert_eq!(nodes[0].original, "a.png");
/// ```
#[must_use]
pub fn collect_media(root: &Selection) -> Vec<MediaNode> {
    collect_media_with_options(root, &Options::default())
}

/// Collects media records below `root`, honoring the detector toggles in
/// `options`.
#[must_use]
pub fn collect_media_with_options(root: &Selection, options: &Options) -> Vec<MediaNode> {
    let mut nodes = Vec::new();
    let mut visited = 0usize;

    walk_descendants(root, |child| {
        visited += 1;
        nodes.extend(classify_node(child, options));
        if options.include_audio {
            nodes.extend(detect_audio(child));
        }
        if options.include_videos {
            nodes.extend(detect_video_placeholder(child));
        }
    });

    debug!(visited, found = nodes.len(), "collected media nodes");
    nodes
}

/// Collects sections below `root` that contain only an audio widget.
#[must_use]
pub fn find_standalone_audio(root: &Selection) -> Vec<MediaNode> {
    let mut nodes = Vec::new();
    walk_descendants(root, |child| nodes.extend(detect_standalone_audio(child)));
    nodes
}
