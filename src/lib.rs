//! # rs-article-media
//!
//! Media reference extraction for embedded article pages.
//!
//! Article bodies from the supported publishing platform carry their media in
//! several shapes: lazy-loaded `<img>` tags, CSS background images (inline or
//! in a dedicated attribute, sometimes on `<svg>` elements), custom audio
//! widget elements inside `<section>`s, video player iframes, and a script
//! array listing every rendition of each video. This crate finds all of them
//! and returns a flat list of [`MediaNode`]s plus the best rendition URL per
//! video, ready for a downstream tool to re-host and rewrite.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_article_media::{extract, MediaKind};
//!
//! let html = r#"<html><body>
//!   <p><img data-src="https://img.example.com/a.png"></p>
//!   <section style="background-image:url('https://img.example.com/bg.png');padding:4px"></section>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.media_of_kind(MediaKind::Image).count(), 1);
//! assert!(result.videos.renditions.is_empty());
//! # Ok::<(), rs_article_media::Error>(())
//! ```
//!
//! ## Lower-level API
//!
//! The walker ([`collect_media`]) and the rendition scanner
//! ([`extract_video_renditions`]) work on an already parsed
//! [`dom::Document`] and never fail; malformed markup yields partial
//! results. Neither mutates the document, and records refer to nodes by
//! [`dom::NodeId`] so the caller stays in charge of rewriting.

use std::io::Read;

use tracing::debug;

mod error;
mod options;
mod patterns;
mod result;

/// Read-only DOM adapter over `dom_query`.
pub mod dom;

/// Media node classification and the subtree walker.
pub mod media;

/// Video rendition extraction from page scripts.
pub mod renditions;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use media::{collect_media, collect_media_with_options, find_standalone_audio};
pub use options::Options;
pub use renditions::{extract_video_renditions, extract_video_renditions_with_options};
pub use result::{ExtractResult, MediaKind, MediaNode, VideoRenditions};

/// Extracts media from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_article_media::extract;
///
/// let html = r#"<body><span><iframe data-mpvid="wxv_42"></iframe></span></body>"#;
/// let result = extract(html)?;
/// assert_eq!(result.media[0].original, "wxv_42");
/// # Ok::<(), rs_article_media::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts media from an HTML document with custom options.
///
/// Walks the subtree picked by `options.content_selector` (falling back to
/// `body`, then the whole document) and, unless disabled, scans every script
/// of the document for video renditions.
///
/// Returns [`Error::EmptyDocument`] for blank input and
/// [`Error::InvalidOptions`] when `options` fail validation.
///
/// # Example
///
/// ```rust
/// use rs_article_media::{extract_with_options, Options};
///
/// let html = r#"<body><div id="js_content"><img src="in.png"></div><img src="out.png"></body>"#;
/// let options = Options {
///     content_selector: Some("#js_content".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.media.len(), 1);
/// assert_eq!(result.media[0].original, "in.png");
/// # Ok::<(), rs_article_media::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let document = dom::parse(html);
    let mut warnings = Vec::new();

    let root = content_root(&document, options, &mut warnings);
    let media = collect_media_with_options(&root, options);

    let videos = if options.include_renditions {
        extract_video_renditions_with_options(&document, options)
    } else {
        VideoRenditions::default()
    };
    warnings.extend(videos.warnings.iter().cloned());

    debug!(
        media = media.len(),
        renditions = videos.renditions.len(),
        covers = videos.cover_urls.len(),
        "extraction complete"
    );

    Ok(ExtractResult {
        media,
        videos,
        warnings,
    })
}

/// Extracts media from HTML bytes, detecting the character encoding.
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts media from HTML bytes with custom options, detecting the
/// character encoding.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Reads a whole document from `reader` and extracts media from it.
pub fn extract_reader<R: Read>(mut reader: R, options: &Options) -> Result<ExtractResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    extract_bytes_with_options(&bytes, options)
}

/// Subtree to walk: the configured selector, else `body`, else the root.
fn content_root<'a>(
    document: &'a dom::Document,
    options: &Options,
    warnings: &mut Vec<String>,
) -> dom::Selection<'a> {
    if let Some(selector) = options.content_selector.as_deref() {
        if let Some(sel) = dom::query_selector(document, selector) {
            return sel;
        }
        warnings.push(format!(
            "content selector '{selector}' matched nothing; using document body"
        ));
    }
    dom::query_selector(document, patterns::BODY_SELECTOR)
        .unwrap_or_else(|| dom::Selection::from(document.root()))
}
