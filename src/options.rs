//! Configuration options for media extraction.
//!
//! The `Options` struct toggles individual detectors and tunes the video
//! rendition scan. Detector toggles only filter output; they never change
//! how a matching node is classified.

use crate::error::{Error, Result};
use crate::patterns::HD_QUALITY_LEVEL;

/// Configuration options for media extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_article_media::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Only look for audio and video
/// let options = Options {
///     include_images: false,
///     include_backgrounds: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Emit `Image` records for `<img>` and `<embed>` elements.
    ///
    /// Default: `true`
    pub include_images: bool,

    /// Emit `Background` and `Cover` records from lazy-background
    /// attributes, inline styles, and SVG styles.
    ///
    /// Default: `true`
    pub include_backgrounds: bool,

    /// Emit `Audio` records for sections embedding audio widgets.
    ///
    /// Default: `true`
    pub include_audio: bool,

    /// Emit `Video` records for player iframes carrying a video id.
    ///
    /// Default: `true`
    pub include_videos: bool,

    /// Scan script text for video renditions in [`crate::extract`].
    ///
    /// Default: `true`
    pub include_renditions: bool,

    /// CSS selector of the subtree to walk in [`crate::extract`].
    ///
    /// When unset or when the selector matches nothing, `body` is used,
    /// then the document root.
    ///
    /// Default: `None`
    pub content_selector: Option<String>,

    /// Quality level a rendition must carry to be kept.
    ///
    /// Default: `"3"`
    pub hd_quality_level: String,

    /// Rewrite `http://` to `https://` in rendition URLs.
    ///
    /// Default: `true`
    pub upgrade_to_https: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_images: true,
            include_backgrounds: true,
            include_audio: true,
            include_videos: true,
            include_renditions: true,
            content_selector: None,
            hd_quality_level: HD_QUALITY_LEVEL.to_string(),
            upgrade_to_https: true,
        }
    }
}

impl Options {
    /// Checks that the options can drive an extraction.
    pub fn validate(&self) -> Result<()> {
        if self.hd_quality_level.trim().is_empty() {
            return Err(Error::InvalidOptions(
                "hd_quality_level must not be empty".to_string(),
            ));
        }
        if self
            .content_selector
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            return Err(Error::InvalidOptions(
                "content_selector must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert!(opts.include_images);
        assert!(opts.include_backgrounds);
        assert!(opts.include_audio);
        assert!(opts.include_videos);
        assert!(opts.include_renditions);
        assert!(opts.upgrade_to_https);
        assert_eq!(opts.hd_quality_level, "3");
        assert!(opts.content_selector.is_none());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_quality_level() {
        let opts = Options {
            hd_quality_level: "  ".to_string(),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_rejects_blank_selector() {
        let opts = Options {
            content_selector: Some(String::new()),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }
}
