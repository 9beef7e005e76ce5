use std::collections::HashSet;

use rs_article_media::dom::{self, Document, Selection};
use rs_article_media::media::{split_background, walk_descendants};
use rs_article_media::{collect_media, find_standalone_audio, MediaKind};

/// Counts how often each element is visited.
fn visit_counts(doc: &Document, root: &str) -> (usize, usize) {
    let mut visits = Vec::new();
    walk_descendants(&doc.select(root), |sel| {
        visits.push(dom::node_id(sel));
    });
    let distinct: HashSet<_> = visits.iter().collect();
    (visits.len(), distinct.len())
}

#[test]
fn walker_visits_each_descendant_once() {
    let doc = Document::from(
        r#"<div id="root">
            <section><p><span>a</span><span>b</span></p></section>
            <ul><li>1</li><li>2<ul><li>2.1</li></ul></li></ul>
            <table><tr><td>x</td></tr></table>
        </div>"#,
    );
    let expected = doc.select("#root *").length();
    let (total, distinct) = visit_counts(&doc, "#root");

    assert_eq!(total, expected);
    assert_eq!(distinct, expected);
}

#[test]
fn walker_order_matches_document_order() {
    let doc = Document::from(
        r#"<div id="root"><p id="a"><b id="b"></b></p><p id="c"><i id="d"><u id="e"></u></i></p></div>"#,
    );
    let mut ids = Vec::new();
    walk_descendants(&doc.select("#root"), |sel| {
        ids.push(dom::get_attribute(sel, "id").unwrap_or_default());
    });

    let selector_order: Vec<_> = doc
        .select("#root *")
        .nodes()
        .iter()
        .map(|node| dom::get_attribute(&Selection::from(*node), "id").unwrap_or_default())
        .collect();
    assert_eq!(ids, selector_order);
}

#[test]
fn walker_survives_deep_nesting() {
    let depth = 2_000;
    let html = format!(
        "<div id=\"root\">{}<img src=\"deep.png\">{}</div>",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let doc = Document::from(html.as_str());
    let nodes = collect_media(&doc.select("#root"));

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].original, "deep.png");
}

#[test]
fn style_splitter_reference_case() {
    let split = split_background("background-image:url('a.png');color:red");
    assert_eq!(split.url, "a.png");
    assert_eq!(split.residual, vec!["color:red"]);
}

#[test]
fn image_without_sources_is_reported() {
    let doc = Document::from(r#"<div id="root"><img alt="placeholder"></div>"#);
    let nodes = collect_media(&doc.select("#root"));

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind, MediaKind::Image);
    assert_eq!(nodes[0].original, "");
}

#[test]
fn audio_section_trimmed_to_widget() {
    let doc = Document::from(
        r#"<div id="root"><section><div>x</div><mp-common-mpaudio id=1></mp-common-mpaudio><div>y</div></section></div>"#,
    );
    let nodes = collect_media(&doc.select("#root"));
    let audio: Vec<_> = nodes.iter().filter(|n| n.kind == MediaKind::Audio).collect();

    assert_eq!(audio.len(), 1);
    assert_eq!(audio[0].target, "a");
    assert_eq!(
        audio[0].original,
        r#"<mp-common-mpaudio id="1"></mp-common-mpaudio>"#
    );
}

#[test]
fn voice_widget_gets_v_target() {
    let doc = Document::from(
        r#"<div id="root"><section><mpvoice voice_encode_fileid="f1" name="clip"></mpvoice></section></div>"#,
    );
    let nodes = collect_media(&doc.select("#root"));

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind, MediaKind::Audio);
    assert_eq!(nodes[0].target, "v");
    assert!(nodes[0].original.starts_with("<mpvoice"));
}

#[test]
fn video_record_points_at_wrapper() {
    let doc = Document::from(
        r#"<div id="root"><p id="wrap"><iframe class="video_iframe" data-mpvid="wxv_9"></iframe></p></div>"#,
    );
    let nodes = collect_media(&doc.select("#root"));

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind, MediaKind::Video);
    assert_eq!(Some(nodes[0].node), dom::node_id(&doc.select("#wrap")));
}

#[test]
fn walker_does_not_mutate_document() {
    let html = r#"<div id="root"><img data-src="a.png"><section style="background-image:url(b.png)"><mpvoice></mpvoice></section></div>"#;
    let doc = Document::from(html);
    let before = doc.html().to_string();

    let first = collect_media(&doc.select("#root"));
    let second = collect_media(&doc.select("#root"));

    assert_eq!(doc.html().to_string(), before);
    assert_eq!(first, second);
}

#[test]
fn standalone_audio_requires_widget_only_section() {
    let doc = Document::from(
        r#"<div id="root">
            <section>
                <mp-common-mpaudio name="solo"></mp-common-mpaudio>
            </section>
            <section><p>intro</p><mp-common-mpaudio name="mixed"></mp-common-mpaudio></section>
        </div>"#,
    );
    let nodes = find_standalone_audio(&doc.select("#root"));

    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].original.contains("solo"));
    assert!(nodes[0].target.is_empty());
}
