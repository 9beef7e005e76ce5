//! Line scanner for the rendition table embedded in page scripts.
//!
//! The table is a JavaScript array literal. It opens on a line holding
//! `videoPageInfos` and `[`, and closes on a line holding the qualified
//! `window.__videoPageInfos`. Inside it, every field the scanner cares about
//! sits on its own line with the value in single quotes.

use tracing::trace;

use crate::options::Options;
use crate::patterns::{
    COVER_URL_MARKER, FORMAT_ID_MARKER, JS_ESCAPED_AMP, MP4_MARKER, QUALITY_LEVEL_MARKER,
    SCAN_EXIT_TOKEN, SCAN_START_TOKEN, SCRIPT_QUOTE, VIDEO_ID_MARKER,
};

/// Position of the scanner relative to the rendition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Outside,
    Inside,
}

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub state: ScanState,
    /// Whether the line belongs to the table body.
    pub is_data: bool,
}

impl ScanState {
    /// Advances the state machine by one line.
    ///
    /// The opening line is never data. The exit check runs on every other
    /// line, whatever the current state.
    #[must_use]
    pub fn step(self, line: &str) -> ScanStep {
        if line.contains(SCAN_START_TOKEN) && line.contains('[') {
            return ScanStep {
                state: ScanState::Inside,
                is_data: false,
            };
        }
        let state = if line.contains(SCAN_EXIT_TOKEN) {
            ScanState::Outside
        } else {
            self
        };
        ScanStep {
            state,
            is_data: state == ScanState::Inside,
        }
    }
}

/// Table columns a data line can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    VideoId,
    Url,
    FormatId,
    QualityLevel,
    CoverUrl,
}

/// Columns in the order they are tested on each line.
pub const LINE_FIELDS: [LineField; 5] = [
    LineField::VideoId,
    LineField::Url,
    LineField::FormatId,
    LineField::QualityLevel,
    LineField::CoverUrl,
];

impl LineField {
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            LineField::VideoId => VIDEO_ID_MARKER,
            LineField::Url => MP4_MARKER,
            LineField::FormatId => FORMAT_ID_MARKER,
            LineField::QualityLevel => QUALITY_LEVEL_MARKER,
            LineField::CoverUrl => COVER_URL_MARKER,
        }
    }
}

/// Positional columns gathered from one scan.
///
/// Entry `i` of `urls`, `format_ids` and `quality_levels` describe the same
/// rendition as long as the page lists one line of each per rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenditionTable {
    pub video_ids: Vec<String>,
    pub urls: Vec<String>,
    pub format_ids: Vec<String>,
    pub quality_levels: Vec<String>,
    pub cover_urls: Vec<String>,
    /// Data lines that matched a marker but had no quoted value.
    pub unquoted_lines: usize,
}

impl RenditionTable {
    fn push(&mut self, field: LineField, value: String) {
        match field {
            LineField::VideoId => self.video_ids.push(value),
            LineField::Url => self.urls.push(value),
            LineField::FormatId => self.format_ids.push(value),
            LineField::QualityLevel => self.quality_levels.push(value),
            LineField::CoverUrl => self.cover_urls.push(value),
        }
    }
}

/// First single-quoted value on the line.
///
/// An opening quote without a closing one yields the rest of the line.
#[must_use]
pub fn quoted_value(line: &str) -> Option<&str> {
    line.split(SCRIPT_QUOTE).nth(1)
}

/// Cleans a rendition URL: decodes the escaped ampersand and, when enabled,
/// upgrades plain HTTP.
#[must_use]
pub fn normalize_rendition_url(raw: &str, upgrade_to_https: bool) -> String {
    let url = raw.replace(JS_ESCAPED_AMP, "&");
    if upgrade_to_https {
        url.replace("http://", "https://")
    } else {
        url
    }
}

/// Scans script lines and collects the table columns.
///
/// Each matching data line adds exactly one entry per field it matches. A
/// line without a quoted value adds an empty entry so the columns stay
/// aligned.
#[must_use]
pub fn scan_lines<S: AsRef<str>>(lines: &[S], options: &Options) -> RenditionTable {
    let mut table = RenditionTable::default();
    let mut state = ScanState::default();

    for line in lines {
        let line = line.as_ref();
        let step = state.step(line);
        if step.state != state {
            trace!(from = ?state, to = ?step.state, "rendition scan transition");
        }
        state = step.state;
        if !step.is_data {
            continue;
        }

        for field in LINE_FIELDS {
            if !line.contains(field.marker()) {
                continue;
            }
            let value = match quoted_value(line) {
                Some(v) => v,
                None => {
                    table.unquoted_lines += 1;
                    ""
                }
            };
            let value = if field == LineField::Url {
                normalize_rendition_url(value, options.upgrade_to_https)
            } else {
                value.to_string()
            };
            table.push(field, value);
        }
    }

    table
}
