//! Markup and script conventions of the source publishing platform.
//!
//! These strings form a fixed contract with the platform's generated pages.
//! Classification silently stops matching if the upstream markup changes, so
//! every value here must match the page output byte for byte.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Element Attributes
// =============================================================================

/// Lazy-loaded image source, preferred over `src`.
pub const LAZY_SRC_ATTR: &str = "data-src";

/// Primary image / embed source.
pub const SRC_ATTR: &str = "src";

/// Lazy-loaded background image carried directly as an attribute.
pub const LAZY_BACKGROUND_ATTR: &str = "data-lazy-bgimg";

/// Inline style attribute.
pub const STYLE_ATTR: &str = "style";

/// Video id carried by player iframes.
pub const VIDEO_ID_ATTR: &str = "data-mpvid";

// =============================================================================
// Style Markers
// =============================================================================

pub const BACKGROUND_IMAGE_MARKER: &str = "background-image";
pub const BACKGROUND_MARKER: &str = "background";
pub const URL_MARKER: &str = "url";

/// HTML-escaped double quote left behind by double-encoded style attributes.
pub const ESCAPED_QUOTE: &str = "&quot;";

/// Declaration delimiter inside inline styles.
pub const STYLE_DELIMITER: char = ';';

/// Matches a CSS `url(...)` call and captures its unquoted argument.
#[allow(clippy::expect_used)]
pub static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*["']?([^"')]*)["']?\s*\)"#).expect("CSS_URL regex")
});

// =============================================================================
// Audio Widgets
// =============================================================================

/// Standalone audio widget element.
pub const AUDIO_WIDGET_MARKER: &str = "mp-common-mpaudio";

/// Alternate (voice) audio widget element.
pub const VOICE_WIDGET_MARKER: &str = "mpvoice";

/// Opening tag prefix of a section made only of an audio widget.
pub const AUDIO_WIDGET_OPEN: &str = "<mp-common-mpaudio";

/// Closing tag of an audio widget.
pub const AUDIO_WIDGET_CLOSE: &str = "</mp-common-mpaudio>";

// =============================================================================
// Video Script Scan
// =============================================================================

/// Token that opens the rendition array (the line must also contain `[`).
pub const SCAN_START_TOKEN: &str = "videoPageInfos";

/// Qualified token that closes the rendition array.
///
/// Deliberately longer than [`SCAN_START_TOKEN`]; the two are not symmetric.
pub const SCAN_EXIT_TOKEN: &str = "window.__videoPageInfos";

pub const VIDEO_ID_MARKER: &str = "video_id";
pub const MP4_MARKER: &str = "mp4";
pub const FORMAT_ID_MARKER: &str = "format_id";
pub const QUALITY_LEVEL_MARKER: &str = "video_quality_level";
pub const COVER_URL_MARKER: &str = "cover_url";

/// Quote delimiting values inside the script data.
pub const SCRIPT_QUOTE: char = '\'';

/// JavaScript-escaped ampersand found in rendition URLs.
pub const JS_ESCAPED_AMP: &str = "\\x26amp;";

/// Quality level marking the high-definition rendition.
pub const HD_QUALITY_LEVEL: &str = "3";

// =============================================================================
// Content Roots
// =============================================================================

pub const BODY_SELECTOR: &str = "body";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_url_strips_quotes() {
        let single = CSS_URL.captures("background-image:url('a.png')");
        assert_eq!(single.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("a.png"));

        let double = CSS_URL.captures(r#"background: url("b.svg") no-repeat"#);
        assert_eq!(double.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("b.svg"));

        let bare = CSS_URL.captures("background-image: url(c.jpg)");
        assert_eq!(bare.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("c.jpg"));
    }

    #[test]
    fn css_url_rejects_missing_call() {
        assert!(CSS_URL.captures("background-image: none").is_none());
    }
}
