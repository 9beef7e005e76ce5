//! Per-node image and background classification.
//!
//! Each node is run through [`NODE_RULES`] in order. Rules are independent:
//! a node collects one record per matching rule, so an element can yield an
//! `Image` and a `Background` at once, and a styled background usually yields
//! two `Background` records (style rule plus plain re-check).

use dom_query::{NodeId, Selection};
use tracing::trace;

use crate::dom;
use crate::media::style::{
    is_background_image, is_background_image_url, split_style, split_svg_background,
};
use crate::options::Options;
use crate::patterns::{
    BACKGROUND_IMAGE_MARKER, BACKGROUND_MARKER, LAZY_BACKGROUND_ATTR, LAZY_SRC_ATTR, SRC_ATTR,
    STYLE_ATTR, URL_MARKER,
};
use crate::result::{MediaKind, MediaNode};

/// One detection rule of the node classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRule {
    /// `<img>`: lazy source, else primary source, else empty.
    Image,
    /// Lazy-background attribute, emitted as is.
    LazyBackground,
    /// Background-image declaration in the inline style, only when the node
    /// has no lazy-background attribute.
    StyleBackground,
    /// Second pass over any inline style mentioning a background image.
    PlainStyleBackground,
    /// `<embed>` with a source.
    Embed,
    /// `<svg>` with a background in its inline style.
    SvgBackground,
}

/// Rules in precedence order.
pub const NODE_RULES: [NodeRule; 6] = [
    NodeRule::Image,
    NodeRule::LazyBackground,
    NodeRule::StyleBackground,
    NodeRule::PlainStyleBackground,
    NodeRule::Embed,
    NodeRule::SvgBackground,
];

impl NodeRule {
    /// Kind of record this rule emits.
    #[must_use]
    pub fn kind(self) -> MediaKind {
        match self {
            NodeRule::Image | NodeRule::Embed => MediaKind::Image,
            NodeRule::LazyBackground
            | NodeRule::StyleBackground
            | NodeRule::PlainStyleBackground => MediaKind::Background,
            NodeRule::SvgBackground => MediaKind::Cover,
        }
    }

    /// Whether `options` allow this rule to emit.
    #[must_use]
    pub fn is_enabled(self, options: &Options) -> bool {
        match self.kind() {
            MediaKind::Image => options.include_images,
            _ => options.include_backgrounds,
        }
    }

    /// Runs the rule against one node.
    #[must_use]
    pub fn apply(self, sel: &Selection, id: NodeId) -> Option<MediaNode> {
        match self {
            NodeRule::Image => image_source(sel).map(|src| MediaNode::new(id, self.kind(), src)),
            NodeRule::LazyBackground => dom::get_attribute(sel, LAZY_BACKGROUND_ATTR)
                .filter(|bg| !bg.is_empty())
                .map(|bg| MediaNode::new(id, self.kind(), bg)),
            NodeRule::StyleBackground => {
                if dom::has_attribute(sel, LAZY_BACKGROUND_ATTR) {
                    return None;
                }
                let style = dom::get_attribute(sel, STYLE_ATTR)?;
                let split = split_style(&style, is_background_image_url);
                (!split.url.is_empty())
                    .then(|| MediaNode::new(id, self.kind(), split.url).with_styles(split.residual))
            }
            NodeRule::PlainStyleBackground => {
                let style = dom::get_attribute(sel, STYLE_ATTR)
                    .filter(|s| s.contains(BACKGROUND_IMAGE_MARKER) && s.contains(URL_MARKER))?;
                let split = split_style(&style, is_background_image);
                (!split.url.is_empty())
                    .then(|| MediaNode::new(id, self.kind(), split.url).with_styles(split.residual))
            }
            NodeRule::Embed => {
                if !dom::is_tag(sel, "embed") {
                    return None;
                }
                dom::get_attribute(sel, SRC_ATTR).map(|src| MediaNode::new(id, self.kind(), src))
            }
            NodeRule::SvgBackground => {
                if !dom::is_tag(sel, "svg") {
                    return None;
                }
                let style = dom::get_attribute(sel, STYLE_ATTR)
                    .filter(|s| s.contains(BACKGROUND_MARKER) && s.contains(URL_MARKER))?;
                let split = split_svg_background(&style);
                Some(MediaNode::new(id, self.kind(), split.url).with_styles(split.residual))
            }
        }
    }
}

/// Source of an `<img>`, `None` for any other element.
///
/// An image with neither attribute still counts, with an empty source.
fn image_source(sel: &Selection) -> Option<String> {
    if !dom::is_tag(sel, "img") {
        return None;
    }
    Some(
        dom::get_attribute(sel, LAZY_SRC_ATTR)
            .or_else(|| dom::get_attribute(sel, SRC_ATTR))
            .unwrap_or_default(),
    )
}

/// Applies every enabled rule to `sel`, in precedence order.
#[must_use]
pub fn classify_node(sel: &Selection, options: &Options) -> Vec<MediaNode> {
    let Some(id) = dom::node_id(sel) else {
        return Vec::new();
    };

    NODE_RULES
        .iter()
        .filter(|rule| rule.is_enabled(options))
        .filter_map(|rule| {
            let found = rule.apply(sel, id);
            if found.is_some() {
                trace!(?rule, "node rule matched");
            }
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn classify(html: &str, selector: &str) -> Vec<MediaNode> {
        let doc = Document::from(html);
        let sel = doc.select(selector);
        classify_node(&sel, &Options::default())
    }

    #[test]
    fn test_image_prefers_lazy_source() {
        let nodes = classify(r#"<img data-src="lazy.png" src="eager.png">"#, "img");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Image);
        assert_eq!(nodes[0].original, "lazy.png");
    }

    #[test]
    fn test_image_falls_back_to_src() {
        let nodes = classify(r#"<img src="eager.png">"#, "img");
        assert_eq!(nodes[0].original, "eager.png");
    }

    #[test]
    fn test_image_without_source_is_kept() {
        let nodes = classify(r#"<img alt="nothing">"#, "img");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Image);
        assert!(nodes[0].original.is_empty());
    }

    #[test]
    fn test_lazy_background_skips_style_rule() {
        let nodes = classify(r#"<div data-lazy-bgimg="lazy-bg.jpg" style="color:red"></div>"#, "div");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Background);
        assert_eq!(nodes[0].original, "lazy-bg.jpg");
        assert!(nodes[0].styles.is_empty());
    }

    #[test]
    fn test_empty_lazy_background_leaves_plain_recheck() {
        let nodes = classify(
            r#"<div data-lazy-bgimg="" style="background-image:url(a.png)"></div>"#,
            "div",
        );
        // Style rule is suppressed by the attribute; the plain re-check still fires.
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].original, "a.png");
    }

    #[test]
    fn test_lazy_background_and_style_both_emit() {
        let nodes = classify(
            r#"<div data-lazy-bgimg="lazy.jpg" style="background-image:url('style.jpg');top:0"></div>"#,
            "div",
        );
        let originals: Vec<_> = nodes.iter().map(|n| n.original.as_str()).collect();
        assert_eq!(originals, vec!["lazy.jpg", "style.jpg"]);
        assert_eq!(nodes[1].styles, vec!["top:0"]);
    }

    #[test]
    fn test_style_background_emits_twice() {
        let nodes = classify(
            r#"<section style="background-image:url('a.png');color:red"></section>"#,
            "section",
        );
        assert_eq!(nodes.len(), 2);
        for node in &nodes {
            assert_eq!(node.kind, MediaKind::Background);
            assert_eq!(node.original, "a.png");
            assert_eq!(node.styles, vec!["color:red"]);
        }
    }

    #[test]
    fn test_style_without_url_is_ignored() {
        let nodes = classify(r#"<div style="background-image:none;color:red"></div>"#, "div");
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_image_with_background_style() {
        let nodes = classify(
            r#"<img src="a.png" style="background-image:url(b.png)">"#,
            "img",
        );
        let kinds: Vec<_> = nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Image, MediaKind::Background, MediaKind::Background]
        );
    }

    #[test]
    fn test_embed_with_source() {
        let nodes = classify(r#"<embed src="chart.svg" type="image/svg+xml">"#, "embed");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Image);
        assert_eq!(nodes[0].original, "chart.svg");
    }

    #[test]
    fn test_embed_without_source() {
        assert!(classify(r#"<embed type="image/svg+xml">"#, "embed").is_empty());
    }

    #[test]
    fn test_svg_background_is_cover() {
        let nodes = classify(
            r#"<svg style="display:block;background: url(&quot;bg.svg&quot;) no-repeat top;width:10px"></svg>"#,
            "svg",
        );
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Cover);
        assert_eq!(nodes[0].original, "bg.svg");
        assert_eq!(nodes[0].styles, vec!["display:block", "width:10px", "no-repeat top"]);
    }

    #[test]
    fn test_svg_with_trailing_background_declarations_gives_empty_cover() {
        let nodes = classify(
            r#"<svg style="background-image:url(a.svg); background-size:100%; background-repeat:no-repeat;"></svg>"#,
            "svg",
        );
        let kinds: Vec<_> = nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Background, MediaKind::Background, MediaKind::Cover]
        );
        assert_eq!(nodes[0].original, "a.svg");
        assert_eq!(nodes[2].original, "");
        assert_eq!(nodes[2].styles, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_options_filter_rules() {
        let doc = Document::from(r#"<img src="a.png" style="background-image:url(b.png)">"#);
        let sel = doc.select("img");

        let images_only = Options {
            include_backgrounds: false,
            ..Options::default()
        };
        let nodes = classify_node(&sel, &images_only);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, MediaKind::Image);

        let backgrounds_only = Options {
            include_images: false,
            ..Options::default()
        };
        let nodes = classify_node(&sel, &backgrounds_only);
        assert!(nodes.iter().all(|n| n.kind == MediaKind::Background));
    }

    #[test]
    fn test_rule_kinds() {
        assert_eq!(NodeRule::Embed.kind(), MediaKind::Image);
        assert_eq!(NodeRule::SvgBackground.kind(), MediaKind::Cover);
        assert_eq!(NodeRule::PlainStyleBackground.kind(), MediaKind::Background);
    }
}
