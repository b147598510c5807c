//! Classify one line of model output

use crate::citation::{extract_segments, Segment};
use inquiry_domain::Tier;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;

/// Optional icon, optional whitespace, tier name as a prefix, then an optional
/// separator and the whitespace around it. Built from the taxonomy so the
/// icons and names cannot drift from it.
static TIER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let icons = Tier::ALL
        .iter()
        .map(|tier| regex::escape(tier.icon().trim_end_matches('\u{fe0f}')))
        .collect::<Vec<_>>()
        .join("|");
    let names = Tier::ALL
        .iter()
        .map(|tier| tier.name())
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"^(?:(?:{icons})\x{{FE0F}}?)?\s*(?i:({names}))\s*[—\-:]?\s*");
    Regex::new(&pattern).expect("valid tier pattern")
});

static HASH_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,3}\s").expect("valid header pattern"));

static HASH_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s").expect("valid header prefix pattern"));

static BOLD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^*]").expect("valid bold pattern"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s").expect("valid bullet pattern"));

/// Kind tag of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Claim labelled with a tier
    TierBlock,
    /// Section header
    Header,
    /// List item
    Bullet,
    /// Empty or whitespace-only
    Blank,
    /// Anything else
    Plain,
}

/// One classified line, ready for styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedLine {
    /// Line opened by a tier label; the label is stripped from the segments
    TierBlock {
        /// Matched tier
        #[serde(serialize_with = "serialize_tier")]
        tier: Tier,
        /// Remainder of the line
        segments: Vec<Segment>,
    },

    /// Header; always a single text segment, citations are not extracted
    Header {
        /// Header text without markers
        segments: Vec<Segment>,
    },

    /// Bullet item without its `- ` / `* ` prefix
    Bullet {
        /// Item content
        segments: Vec<Segment>,
    },

    /// Blank line
    Blank,

    /// Ordinary prose
    Plain {
        /// Line content
        segments: Vec<Segment>,
    },
}

impl RenderedLine {
    /// Kind tag
    pub fn kind(&self) -> LineKind {
        match self {
            RenderedLine::TierBlock { .. } => LineKind::TierBlock,
            RenderedLine::Header { .. } => LineKind::Header,
            RenderedLine::Bullet { .. } => LineKind::Bullet,
            RenderedLine::Blank => LineKind::Blank,
            RenderedLine::Plain { .. } => LineKind::Plain,
        }
    }

    /// Tier of a tier block
    pub fn tier(&self) -> Option<Tier> {
        match self {
            RenderedLine::TierBlock { tier, .. } => Some(*tier),
            _ => None,
        }
    }

    /// Inline segments; empty for blank lines
    pub fn segments(&self) -> &[Segment] {
        match self {
            RenderedLine::TierBlock { segments, .. }
            | RenderedLine::Header { segments }
            | RenderedLine::Bullet { segments }
            | RenderedLine::Plain { segments } => segments,
            RenderedLine::Blank => &[],
        }
    }
}

fn serialize_tier<S: Serializer>(tier: &Tier, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tier.name())
}

/// Classify a single line (no embedded newline)
///
/// Checks run in a fixed order and the first match wins: tier block, header,
/// bullet, blank, plain. Nothing here can fail; malformed markup simply falls
/// through to the next check.
pub fn classify_line(line: &str) -> RenderedLine {
    if let Some(rendered) = classify_tier_block(line) {
        return rendered;
    }

    if HASH_HEADER.is_match(line) || (BOLD_HEADER.is_match(line) && line.ends_with("**")) {
        return RenderedLine::Header {
            segments: vec![Segment::text(header_text(line))],
        };
    }

    if let Some(prefix) = BULLET.find(line) {
        return RenderedLine::Bullet {
            segments: extract_segments(&line[prefix.end()..]),
        };
    }

    if line.trim().is_empty() {
        return RenderedLine::Blank;
    }

    RenderedLine::Plain {
        segments: extract_segments(line),
    }
}

/// Tier names are matched as a prefix, so prose such as "Consensus is rare"
/// is also a tier block.
fn classify_tier_block(line: &str) -> Option<RenderedLine> {
    let caps = TIER_PREFIX.captures(line)?;
    let tier = Tier::parse(caps.get(1)?.as_str())?;
    let body = &line[caps.get(0)?.end()..];

    Some(RenderedLine::TierBlock {
        tier,
        segments: extract_segments(body),
    })
}

fn header_text(line: &str) -> String {
    let stripped = HASH_PREFIX.replace(line, "");
    let text: &str = &stripped;
    let text = text.strip_prefix("**").unwrap_or(text);
    let text = text.strip_suffix("**").unwrap_or(text);
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::CitationVariant;

    #[test]
    fn test_tier_block_with_dash_separator_and_citation() {
        let line = classify_line("VERIFIED — The sky is blue [Source: NASA, 2020]");
        assert_eq!(
            line,
            RenderedLine::TierBlock {
                tier: Tier::Verified,
                segments: vec![
                    Segment::text("The sky is blue "),
                    Segment::Citation {
                        raw: "NASA, 2020".to_string(),
                        variant: CitationVariant::Generic,
                    },
                ],
            }
        );
    }

    #[test]
    fn test_tier_block_with_icon_and_colon() {
        let line = classify_line("✅ VERIFIED: claim text");
        assert_eq!(line.tier(), Some(Tier::Verified));
        assert_eq!(line.segments(), &[Segment::text("claim text")]);
    }

    #[test]
    fn test_tier_block_accepts_every_icon() {
        for tier in Tier::ALL {
            let line = classify_line(&format!("{} {} - body", tier.icon(), tier.name()));
            assert_eq!(line.tier(), Some(tier), "icon {}", tier.icon());
            assert_eq!(line.segments(), &[Segment::text("body")]);
        }
    }

    #[test]
    fn test_warning_icon_without_variation_selector() {
        let line = classify_line("\u{26a0} UNVERIFIED: rumor");
        assert_eq!(line.tier(), Some(Tier::Unverified));
        assert_eq!(line.segments(), &[Segment::text("rumor")]);
    }

    #[test]
    fn test_tier_name_is_case_insensitive() {
        let line = classify_line("hypothesis - maybe");
        assert_eq!(line.tier(), Some(Tier::Hypothesis));
        assert_eq!(line.segments(), &[Segment::text("maybe")]);
    }

    #[test]
    fn test_unverified_is_not_mistaken_for_verified() {
        assert_eq!(classify_line("UNVERIFIED — leak").tier(), Some(Tier::Unverified));
    }

    #[test]
    fn test_prose_starting_with_tier_word_is_tier_block() {
        let line = classify_line("Consensus is rare");
        assert_eq!(line.tier(), Some(Tier::Consensus));
        assert_eq!(line.segments(), &[Segment::text("is rare")]);
    }

    #[test]
    fn test_bare_tier_name_has_single_empty_segment() {
        let line = classify_line("SPECULATION");
        assert_eq!(line.kind(), LineKind::TierBlock);
        assert_eq!(line.segments(), &[Segment::text("")]);
    }

    #[test]
    fn test_hash_headers() {
        assert_eq!(
            classify_line("## Open Questions"),
            RenderedLine::Header {
                segments: vec![Segment::text("Open Questions")]
            }
        );
        assert_eq!(classify_line("# A").kind(), LineKind::Header);
        assert_eq!(classify_line("### A").kind(), LineKind::Header);
        assert_eq!(classify_line("#### A").kind(), LineKind::Plain);
        assert_eq!(classify_line("#nospace").kind(), LineKind::Plain);
    }

    #[test]
    fn test_bold_header() {
        assert_eq!(
            classify_line("**What we know**"),
            RenderedLine::Header {
                segments: vec![Segment::text("What we know")]
            }
        );
        assert_eq!(classify_line("**").kind(), LineKind::Plain);
        assert_eq!(classify_line("**open only").kind(), LineKind::Plain);
    }

    #[test]
    fn test_header_does_not_extract_citations() {
        let line = classify_line("# Sources [Source: X]");
        assert_eq!(line.segments(), &[Segment::text("Sources [Source: X]")]);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            classify_line("- bullet text"),
            RenderedLine::Bullet {
                segments: vec![Segment::text("bullet text")]
            }
        );
        let star = classify_line("* item [Source: EYEWITNESS - pilot]");
        assert_eq!(star.kind(), LineKind::Bullet);
        assert!(star.segments()[1].is_citation());
        assert_eq!(classify_line("-no space").kind(), LineKind::Plain);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), RenderedLine::Blank);
        assert_eq!(classify_line("  \t "), RenderedLine::Blank);
        assert!(classify_line("").segments().is_empty());
    }

    #[test]
    fn test_plain_line() {
        let line = classify_line("Open Questions — none");
        assert_eq!(line.kind(), LineKind::Plain);
        assert_eq!(line.segments(), &[Segment::text("Open Questions — none")]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let input = "💡 HYPOTHESIS — plasma vortex [Source: UNVERIFIED - forum post]";
        assert_eq!(classify_line(input), classify_line(input));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(classify_line("CORROBORATED: two labs [Source: Nature, 2021]"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "tier-block",
                "tier": "CORROBORATED",
                "segments": [
                    {"kind": "text", "value": "two labs "},
                    {"kind": "citation", "raw": "Nature, 2021", "variant": "generic"}
                ]
            })
        );
        assert_eq!(
            serde_json::to_value(classify_line("")).unwrap(),
            serde_json::json!({"kind": "blank"})
        );
    }
}
