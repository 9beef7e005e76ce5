//! Inline style splitting.
//!
//! Separates the background declaration of an inline `style` attribute from
//! the rest. Splitting is lexical on `;`: no CSS parsing, no whitespace
//! normalization, and empty fragments (from `;;` or a trailing `;`) are kept
//! so the residual re-serializes to what the page had.

use crate::patterns::{
    BACKGROUND_IMAGE_MARKER, BACKGROUND_MARKER, CSS_URL, ESCAPED_QUOTE, STYLE_DELIMITER,
    URL_MARKER,
};

/// A style attribute split into its background URL and remaining declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSplit {
    /// Argument of the `url(...)` call in the last matching declaration.
    pub url: String,
    /// Every non-matching declaration, in source order.
    pub residual: Vec<String>,
}

/// Declaration predicate: contains `background-image` and `url`.
#[must_use]
pub fn is_background_image_url(declaration: &str) -> bool {
    declaration.contains(BACKGROUND_IMAGE_MARKER) && declaration.contains(URL_MARKER)
}

/// Declaration predicate: contains `background-image`.
#[must_use]
pub fn is_background_image(declaration: &str) -> bool {
    declaration.contains(BACKGROUND_IMAGE_MARKER)
}

/// Declaration predicate: contains `background` (shorthand or longhand).
#[must_use]
pub fn is_background(declaration: &str) -> bool {
    declaration.contains(BACKGROUND_MARKER)
}

/// Replaces HTML-escaped quotes with literal ones.
#[must_use]
pub fn unescape_quotes(style: &str) -> String {
    style.replace(ESCAPED_QUOTE, "\"")
}

/// Extracts the argument of the first `url(...)` call, without quotes.
///
/// Returns an empty string when the declaration has no `url(...)` call.
#[must_use]
pub fn background_url(declaration: &str) -> String {
    CSS_URL
        .captures(declaration)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Splits `style` into the background URL and the residual declarations.
///
/// Uses [`is_background_image_url`] to pick the target declaration.
///
/// # Example
///
/// ```rust
/// use rs_article_media::media::style::split_background;
///
/// let split = split_background("background-image:url('a.png');color:red");
/// assert_eq!(split.url, "a.png");
/// assert_eq!(split.residual, vec!["color:red"]);
/// ```
#[must_use]
pub fn split_background(style: &str) -> StyleSplit {
    split_style(style, is_background_image_url)
}

/// Splits `style`, treating every declaration accepted by `is_target` as a
/// background declaration.
///
/// When several declarations match, the URL of the last one wins and all of
/// them are dropped from the residual list.
#[must_use]
pub fn split_style(style: &str, is_target: impl Fn(&str) -> bool) -> StyleSplit {
    let style = unescape_quotes(style);
    let mut split = StyleSplit::default();

    for declaration in style.split(STYLE_DELIMITER) {
        if is_target(declaration) {
            split.url = background_url(declaration);
        } else {
            split.residual.push(declaration.to_string());
        }
    }

    split
}

/// Splits an `<svg>` style attribute.
///
/// Like [`split_style`] with [`is_background`], but the tokens written after
/// the `url(...)` call (repeat and position keywords) are kept: they are
/// appended to the residual list as one space-joined entry. The entry is
/// always appended, empty when there were no such tokens.
#[must_use]
pub fn split_svg_background(style: &str) -> StyleSplit {
    let style = unescape_quotes(style);
    let mut split = StyleSplit::default();
    let mut trailing = String::new();

    for declaration in style.split(STYLE_DELIMITER) {
        if is_background(declaration) {
            split.url = background_url(declaration);
            trailing = trailing_tokens(declaration);
        } else {
            split.residual.push(declaration.to_string());
        }
    }

    split.residual.push(trailing);
    split
}

/// Whitespace-separated tokens following the `url(...)` call, joined by a
/// single space.
fn trailing_tokens(declaration: &str) -> String {
    CSS_URL
        .find(declaration)
        .map(|m| {
            declaration[m.end()..]
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
