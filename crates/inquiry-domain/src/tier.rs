//! Tier module - confidence tiers a model attaches to claims

use crate::palette::{Rgb, Theme};
use std::fmt;

/// Evidence tier of a claim
///
/// The model is instructed to tag every significant claim with one of these,
/// ordered from strongest to weakest support:
/// - Verified: peer-reviewed, replicated
/// - Corroborated: multiple independent sources
/// - Consensus: strong specialist agreement
/// - Hypothesis: coherent but untested
/// - Unverified: single source, leaked, anecdotal
/// - Speculation: low evidential support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Peer-reviewed, replicated, high confidence
    Verified,

    /// Multiple independent sources, not formally proven
    Corroborated,

    /// Strong specialist agreement, may lack full empirical proof
    Consensus,

    /// Logically coherent, physically possible, not yet tested
    Hypothesis,

    /// Single source, leaked, or anecdotal
    Unverified,

    /// Interesting narrative, low evidential support
    Speculation,
}

impl Tier {
    /// All tiers in declaration order
    pub const ALL: [Tier; 6] = [
        Tier::Verified,
        Tier::Corroborated,
        Tier::Consensus,
        Tier::Hypothesis,
        Tier::Unverified,
        Tier::Speculation,
    ];

    /// Get the tier name as it appears in model output
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Verified => "VERIFIED",
            Tier::Corroborated => "CORROBORATED",
            Tier::Consensus => "CONSENSUS",
            Tier::Hypothesis => "HYPOTHESIS",
            Tier::Unverified => "UNVERIFIED",
            Tier::Speculation => "SPECULATION",
        }
    }

    /// Get the human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Verified => "Verified",
            Tier::Corroborated => "Corroborated",
            Tier::Consensus => "Consensus",
            Tier::Hypothesis => "Hypothesis",
            Tier::Unverified => "Unverified",
            Tier::Speculation => "Speculation",
        }
    }

    /// Get the icon glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Verified => "✅",
            Tier::Corroborated => "📋",
            Tier::Consensus => "🔵",
            Tier::Hypothesis => "💡",
            Tier::Unverified => "\u{26a0}\u{fe0f}",
            Tier::Speculation => "🌀",
        }
    }

    /// Get the one-line description used in the legend
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Verified => "Peer-reviewed, replicated, high confidence",
            Tier::Corroborated => "Multiple independent sources, not formally proven",
            Tier::Consensus => "Strong specialist agreement, may lack full empirical proof",
            Tier::Hypothesis => "Logically coherent, physically possible, not yet tested",
            Tier::Unverified => "Single source, leaked, or anecdotal",
            Tier::Speculation => "Interesting narrative, low evidential support",
        }
    }

    /// Get the semantic color for a theme
    pub fn color(&self, theme: Theme) -> Rgb {
        let hex = match (self, theme) {
            (Tier::Verified, Theme::Light) => 0x16a34a,
            (Tier::Verified, Theme::Dark) => 0x4ade80,
            (Tier::Corroborated, Theme::Light) => 0x2563eb,
            (Tier::Corroborated, Theme::Dark) => 0x60a5fa,
            (Tier::Consensus, Theme::Light) => 0x0284c7,
            (Tier::Consensus, Theme::Dark) => 0x38bdf8,
            (Tier::Hypothesis, Theme::Light) => 0xd97706,
            (Tier::Hypothesis, Theme::Dark) => 0xfbbf24,
            (Tier::Unverified, Theme::Light) => 0xea580c,
            (Tier::Unverified, Theme::Dark) => 0xfb923c,
            (Tier::Speculation, Theme::Light) => 0x9333ea,
            (Tier::Speculation, Theme::Dark) => 0xc084fc,
        };
        Rgb::from_hex(hex)
    }

    /// Parse a tier from its exact name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = Tier::ALL.iter().map(Tier::name).collect();
        assert_eq!(
            names,
            ["VERIFIED", "CORROBORATED", "CONSENSUS", "HYPOTHESIS", "UNVERIFIED", "SPECULATION"]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Tier::parse("verified"), Some(Tier::Verified));
        assert_eq!(Tier::parse("Consensus"), Some(Tier::Consensus));
        assert_eq!("SPECULATION".parse::<Tier>(), Ok(Tier::Speculation));
        assert!(Tier::parse("verifiedish").is_none());
        assert!(Tier::parse("").is_none());
    }

    #[test]
    fn test_colors_differ_per_theme() {
        for tier in Tier::ALL {
            assert_ne!(tier.color(Theme::Light), tier.color(Theme::Dark));
        }
        assert_eq!(Tier::Verified.color(Theme::Light).to_string(), "#16a34a");
        assert_eq!(Tier::Speculation.color(Theme::Dark).to_string(), "#c084fc");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Tier::Hypothesis.to_string(), "HYPOTHESIS");
        assert_eq!(Tier::Hypothesis.label(), "Hypothesis");
    }
}
