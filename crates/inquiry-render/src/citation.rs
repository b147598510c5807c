//! Split text into plain runs and `[Source: ...]` citation chips

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `[Source:` up to the first `]`, non-greedy and never across a newline
static SOURCE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Source:\s*(.*?)\]").expect("valid citation pattern"));

/// How a citation should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationVariant {
    /// Leaked or otherwise unverifiable source
    Unverified,

    /// Eyewitness testimony only
    Eyewitness,

    /// Anything else
    Generic,
}

impl CitationVariant {
    /// Classify a citation body by case-insensitive substring match
    ///
    /// `UNVERIFIED` wins over `EYEWITNESS` when both appear.
    pub fn classify(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        if upper.contains("UNVERIFIED") {
            CitationVariant::Unverified
        } else if upper.contains("EYEWITNESS") {
            CitationVariant::Eyewitness
        } else {
            CitationVariant::Generic
        }
    }

    /// Glyph shown in front of the citation text
    pub fn icon(&self) -> &'static str {
        match self {
            CitationVariant::Unverified => "⚠",
            CitationVariant::Eyewitness => "👁",
            CitationVariant::Generic => "·",
        }
    }
}

/// A run of inline content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Plain text, emitted as-is
    Text {
        /// The text
        value: String,
    },

    /// A citation chip
    Citation {
        /// Citation body, trimmed, otherwise verbatim
        raw: String,
        /// Presentation kind
        variant: CitationVariant,
    },
}

impl Segment {
    /// Build a text segment
    pub fn text(value: impl Into<String>) -> Self {
        Segment::Text {
            value: value.into(),
        }
    }

    /// Build a citation segment, classifying its variant
    pub fn citation(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let variant = CitationVariant::classify(&raw);
        Segment::Citation { raw, variant }
    }

    /// True for citation segments
    pub fn is_citation(&self) -> bool {
        matches!(self, Segment::Citation { .. })
    }
}

/// Split a single line of text into text and citation segments
///
/// Empty text runs between or around citations are omitted. The result is
/// never empty: text without any well-formed `[Source: ...]` tag comes back
/// as exactly one text segment equal to the input.
pub fn extract_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in SOURCE_TAG.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if whole.start() > last_end {
            segments.push(Segment::text(&text[last_end..whole.start()]));
        }
        segments.push(Segment::citation(body.as_str().trim()));
        last_end = whole.end();
    }

    if segments.is_empty() {
        return vec![Segment::text(text)];
    }

    if last_end < text.len() {
        segments.push(Segment::text(&text[last_end..]));
    }

    segments
}
