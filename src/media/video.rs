//! Video player placeholders.

use dom_query::Selection;

use crate::dom;
use crate::patterns::VIDEO_ID_ATTR;
use crate::result::{MediaKind, MediaNode};

/// Record for an `<iframe>` player carrying a video id.
///
/// The record points at the iframe's parent: players are replaced at the
/// wrapper level. `original` is the raw video id.
#[must_use]
pub fn detect_video_placeholder(sel: &Selection) -> Option<MediaNode> {
    if !dom::is_tag(sel, "iframe") {
        return None;
    }
    let vid = dom::get_attribute(sel, VIDEO_ID_ATTR)?;
    let parent = dom::parent_id(sel)?;
    Some(MediaNode::new(parent, MediaKind::Video, vid))
}
