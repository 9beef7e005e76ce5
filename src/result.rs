//! Result types for extraction output.
//!
//! Media records reference document nodes by [`NodeId`] only. The caller keeps
//! ownership of the parsed document and uses the ids to rewrite it later.

use dom_query::NodeId;
use serde::Serialize;

/// Kind of media a [`MediaNode`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// `<img>` source or `<embed>` source.
    Image,
    /// CSS background image on an element.
    Background,
    /// Background image declared on an `<svg>` element.
    Cover,
    /// Audio widget markup inside a `<section>`.
    Audio,
    /// Video player placeholder; `original` holds the video id.
    Video,
}

/// One classified media reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaNode {
    /// Document node the reference belongs to.
    ///
    /// For [`MediaKind::Video`] this is the player's parent element.
    #[serde(skip)]
    pub node: NodeId,

    /// Extracted source value: an image URL, a `url(...)` argument, a video
    /// id, or a raw markup fragment for audio widgets.
    pub original: String,

    /// Replacement value, filled in by downstream rewriters.
    ///
    /// Audio records use it as a sub-kind: `"a"` for the standalone widget,
    /// `"v"` for the voice widget.
    pub target: String,

    /// What the reference is.
    pub kind: MediaKind,

    /// Declarations left on the node after removing the background one.
    ///
    /// Only populated for `Background` and `Cover` records. Order matches
    /// the source style attribute.
    pub styles: Vec<String>,
}

impl MediaNode {
    /// Creates a record with no target and no residual styles.
    #[must_use]
    pub fn new(node: NodeId, kind: MediaKind, original: impl Into<String>) -> Self {
        Self {
            node,
            original: original.into(),
            target: String::new(),
            kind,
            styles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Vec<String>) -> Self {
        self.styles = styles;
        self
    }
}

/// High-definition video renditions and cover images found in page scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoRenditions {
    /// One playable URL per video id, in script order.
    pub renditions: Vec<String>,

    /// Every cover URL seen inside the rendition data, in script order.
    pub cover_urls: Vec<String>,

    /// Non-fatal problems found while scanning.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Result of media extraction from an HTML document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Media records from the content subtree, in document pre-order.
    pub media: Vec<MediaNode>,

    /// Renditions and covers from the document's scripts.
    pub videos: VideoRenditions,

    /// Warnings encountered during extraction.
    ///
    /// Non-fatal issues such as a missing content root or a rendition
    /// table that could not be grouped.
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// Iterates over media records of one kind.
    pub fn media_of_kind(&self, kind: MediaKind) -> impl Iterator<Item = &MediaNode> {
        self.media.iter().filter(move |m| m.kind == kind)
    }
}
