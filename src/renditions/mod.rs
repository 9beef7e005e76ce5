//! Video rendition extraction from page scripts.
//!
//! Pages describe each video's renditions in a script array rather than in
//! markup. The scan collects the table columns line by line (see [`scan`]),
//! then assigns URLs to video ids by position and keeps the first
//! high-definition rendition of each video.
//!
//! URL `i` belongs to video id `i / (urls / ids)`. The page is expected to
//! list the same number of renditions per video; when it does not, the
//! integer division leaves trailing URLs without an owner and they are
//! dropped.

use std::collections::HashSet;

use dom_query::Document;
use tracing::{debug, warn};

use crate::options::Options;
use crate::result::VideoRenditions;

pub mod scan;
pub mod scripts;

pub use scan::{scan_lines, RenditionTable, ScanState};
pub use scripts::{script_lines, script_text};

/// Appends the player query parameters for `video_id` and `format_id`.
#[must_use]
pub fn rendition_url(url: &str, video_id: &str, format_id: &str) -> String {
    format!("{url}&vid={video_id}&format_id={format_id}&support_redirect=0&mmversion=false")
}

/// Extracts high-definition renditions and covers with default options.
///
/// # Example
///
/// ```rust
/// use rs_article_media::{dom, extract_video_renditions};
///
/// let doc = dom::parse("<script>var videoPageInfos = [\n\
///     video_id: 'wxv_1',\n\
///     url: 'http://v.example.com/1.mp4?k=1',\n\
///     format_id: '10002',\n\
///     video_quality_level: '3',\n\
///     cover_url: 'http://v.example.com/1.jpg',\n\
///     window.__videoPageInfos = videoPageInfos;</script>");
/// let videos = extract_video_renditions(&doc);
/// assert_eq!(videos.renditions.len(), 1);
/// assert_eq!(videos.cover_urls, vec!["http://v.example.com/1.jpg"]);
/// ```
#[must_use]
pub fn extract_video_renditions(doc: &Document) -> VideoRenditions {
    extract_video_renditions_with_options(doc, &Options::default())
}

/// Extracts high-definition renditions and covers from `doc`'s scripts.
#[must_use]
pub fn extract_video_renditions_with_options(doc: &Document, options: &Options) -> VideoRenditions {
    let lines = script_lines(doc);
    let table = scan_lines(&lines, options);
    debug!(
        video_ids = table.video_ids.len(),
        urls = table.urls.len(),
        covers = table.cover_urls.len(),
        "scanned rendition table"
    );
    group_renditions(table, options)
}

/// Turns the scanned columns into one rendition per video id.
///
/// Covers are passed through untouched. Degenerate tables (URLs without
/// ids, fewer URLs than ids) produce no renditions and a warning.
#[must_use]
pub fn group_renditions(table: RenditionTable, options: &Options) -> VideoRenditions {
    let RenditionTable {
        video_ids,
        urls,
        format_ids,
        quality_levels,
        cover_urls,
        unquoted_lines,
    } = table;

    let mut result = VideoRenditions {
        cover_urls,
        ..VideoRenditions::default()
    };
    if unquoted_lines > 0 {
        result
            .warnings
            .push(format!("{unquoted_lines} rendition lines had no quoted value"));
    }
    if urls.is_empty() {
        return result;
    }
    if video_ids.is_empty() {
        warn!(urls = urls.len(), "rendition URLs found without video ids");
        result
            .warnings
            .push(format!("{} rendition URLs found without video ids", urls.len()));
        return result;
    }

    let group_size = urls.len() / video_ids.len();
    if group_size == 0 {
        warn!(
            urls = urls.len(),
            video_ids = video_ids.len(),
            "fewer rendition URLs than video ids"
        );
        result.warnings.push(format!(
            "{} rendition URLs cannot be grouped over {} video ids",
            urls.len(),
            video_ids.len()
        ));
        return result;
    }
    if urls.len() % video_ids.len() != 0 {
        warn!(
            urls = urls.len(),
            video_ids = video_ids.len(),
            "rendition URLs do not divide evenly across video ids"
        );
        result.warnings.push(format!(
            "{} rendition URLs do not divide evenly across {} video ids",
            urls.len(),
            video_ids.len()
        ));
    }

    let mut satisfied: HashSet<&str> = HashSet::new();
    for (i, url) in urls.iter().enumerate() {
        let Some(video_id) = video_ids.get(i / group_size) else {
            continue;
        };
        let is_hd = quality_levels
            .get(i)
            .is_some_and(|level| *level == options.hd_quality_level);
        if !is_hd || satisfied.contains(video_id.as_str()) {
            continue;
        }
        let format_id = format_ids.get(i).map_or("", String::as_str);
        result
            .renditions
            .push(rendition_url(url, video_id, format_id));
        satisfied.insert(video_id.as_str());
    }

    debug!(kept = result.renditions.len(), "selected HD renditions");
    result
}
