//! Output formatting for the CLI.
//!
//! Everything the terminal shows goes through [`Formatter`]. Assistant text is
//! never parsed here: it is rendered by `inquiry-render` and only styled.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use inquiry_domain::{Message, Rgb, Theme, Tier};
use inquiry_render::{
    render_message, CitationVariant, RenderedLine, RenderedMessage, Segment,
};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Text colors of the shell for one theme.
#[derive(Debug, Clone, Copy)]
struct ShellPalette {
    text: Rgb,
    muted: Rgb,
    faint: Rgb,
    very_faint: Rgb,
    error: Rgb,
}

impl ShellPalette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Rgb::from_hex(0xe2e8f0),
                muted: Rgb::from_hex(0x94a3b8),
                faint: Rgb::from_hex(0x475569),
                very_faint: Rgb::from_hex(0x334155),
                error: Rgb::from_hex(0xf87171),
            },
            Theme::Light => Self {
                text: Rgb::from_hex(0x0f172a),
                muted: Rgb::from_hex(0x475569),
                faint: Rgb::from_hex(0x94a3b8),
                very_faint: Rgb::from_hex(0xcbd5e1),
                error: Rgb::from_hex(0xdc2626),
            },
        }
    }
}

/// Output formatter.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    theme: Theme,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, theme: Theme) -> Self {
        Self {
            format,
            color_enabled,
            theme,
        }
    }

    /// Same formatter with another theme.
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Active output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// Format a conversation message.
    pub fn format_message(&self, message: &Message) -> Result<String> {
        match self.format {
            OutputFormat::Raw => Ok(message.content().to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&render_message(message))?),
            OutputFormat::Styled => Ok(self.format_rendered(&render_message(message))),
        }
    }

    /// Style an already rendered message.
    pub fn format_rendered(&self, rendered: &RenderedMessage) -> String {
        match rendered {
            RenderedMessage::User { text } => {
                let palette = self.palette();
                format!("{} {}", self.paint("›", palette.faint), self.paint_bold(text, palette.text))
            }
            RenderedMessage::Assistant { lines } => lines
                .iter()
                .map(|line| self.format_line(line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Style one rendered line.
    pub fn format_line(&self, line: &RenderedLine) -> String {
        let palette = self.palette();
        match line {
            RenderedLine::TierBlock { tier, segments } => {
                let label = format!("{} {}", tier.icon(), tier.name());
                format!(
                    "{} {}",
                    self.paint_bold(&label, tier.color(self.theme)),
                    self.format_segments(segments)
                )
            }
            RenderedLine::Header { segments } => {
                let text: String = segments.iter().map(segment_text).collect();
                self.paint_bold(&text.to_uppercase(), palette.faint)
            }
            RenderedLine::Bullet { segments } => {
                format!("  {} {}", self.paint("·", palette.very_faint), self.format_segments(segments))
            }
            RenderedLine::Blank => String::new(),
            RenderedLine::Plain { segments } => self.format_segments(segments),
        }
    }

    fn format_segments(&self, segments: &[Segment]) -> String {
        let palette = self.palette();
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { value } => self.paint(value, palette.muted),
                Segment::Citation { raw, variant } => {
                    let chip = format!("[{} {}]", variant.icon(), raw);
                    self.paint(&chip, self.citation_color(*variant))
                }
            })
            .collect()
    }

    fn citation_color(&self, variant: CitationVariant) -> Rgb {
        match variant {
            CitationVariant::Unverified => Rgb::from_hex(0xea580c),
            CitationVariant::Eyewitness => Rgb::from_hex(0x9333ea),
            CitationVariant::Generic => self.palette().faint,
        }
    }

    /// Table of every tier in declaration order.
    pub fn legend_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["", "Tier", "Label", "Meaning"]);

        for tier in Tier::ALL {
            builder.push_record([
                tier.icon().to_string(),
                self.paint(tier.name(), tier.color(self.theme)),
                tier.label().to_string(),
                tier.description().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One-line legend shown under replies.
    pub fn legend_line(&self) -> String {
        Tier::ALL
            .iter()
            .map(|tier| self.paint(&format!("{} {}", tier.icon(), tier.label()), tier.color(self.theme)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Indicator shown while a request is outstanding.
    pub fn thinking(&self) -> String {
        self.paint("  · · ·", self.palette().very_faint)
    }

    /// Erase the thinking indicator from the current line.
    ///
    /// Without color no escape sequences are written; the indicator is
    /// overwritten with spaces instead.
    pub fn clear_line(&self) -> String {
        if self.color_enabled {
            "\r\x1b[2K".to_string()
        } else {
            format!("\r{}\r", " ".repeat(self.thinking().chars().count()))
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.paint(&format!("✗ {}", message), self.palette().error)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format secondary text.
    pub fn muted(&self, message: &str) -> String {
        self.paint(message, self.palette().muted)
    }

    fn palette(&self) -> ShellPalette {
        ShellPalette::for_theme(self.theme)
    }

    /// Apply a 24-bit color if color is enabled.
    fn paint(&self, text: &str, color: Rgb) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.truecolor(color.0, color.1, color.2).to_string()
    }

    fn paint_bold(&self, text: &str, color: Rgb) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.truecolor(color.0, color.1, color.2).bold().to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn segment_text(segment: &Segment) -> &str {
    match segment {
        Segment::Text { value } => value,
        Segment::Citation { raw, .. } => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Formatter {
        Formatter::new(OutputFormat::Styled, false, Theme::Dark)
    }

    #[test]
    fn test_styled_assistant_message() {
        let message = Message::assistant(
            "## Summary\nVERIFIED — ok [Source: X, 2021]\n- item [Source: EYEWITNESS - pilot]\n\nplain",
        );
        let output = plain().format_message(&message).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines[0], "SUMMARY");
        assert_eq!(lines[1], "✅ VERIFIED ok [· X, 2021]");
        assert_eq!(lines[2], "  · item [👁 EYEWITNESS - pilot]");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "plain");
    }

    #[test]
    fn test_styled_user_message_is_verbatim() {
        let output = plain().format_message(&Message::user("# not a header")).unwrap();
        assert_eq!(output, "› # not a header");
    }

    #[test]
    fn test_unverified_citation_chip() {
        let output = plain()
            .format_message(&Message::assistant("claim [Source: UNVERIFIED - doc123]"))
            .unwrap();
        assert_eq!(output, "claim [⚠ UNVERIFIED - doc123]");
    }

    #[test]
    fn test_raw_format() {
        let formatter = Formatter::new(OutputFormat::Raw, false, Theme::Dark);
        let output = formatter.format_message(&Message::assistant("VERIFIED — x")).unwrap();
        assert_eq!(output, "VERIFIED — x");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false, Theme::Dark);
        let output = formatter.format_message(&Message::assistant("- a")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["lines"][0]["kind"], "bullet");
    }

    #[test]
    fn test_legend_lists_tiers_in_order() {
        let table = plain().legend_table();
        let positions: Vec<usize> = Tier::ALL
            .iter()
            .map(|tier| table.find(tier.name()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(table.contains("Meaning"));

        let line = plain().legend_line();
        assert!(line.starts_with("✅ Verified"));
        assert!(line.ends_with("🌀 Speculation"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = plain();
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("boom"), "✗ boom");
    }

    #[test]
    fn test_clear_line_without_color_has_no_escapes() {
        let cleared = plain().clear_line();
        assert!(!cleared.contains('\x1b'));
        assert_eq!(cleared, format!("\r{}\r", " ".repeat(7)));

        let colored = Formatter::new(OutputFormat::Styled, true, Theme::Dark);
        assert_eq!(colored.clear_line(), "\r\x1b[2K");
    }

    #[test]
    fn test_with_theme_keeps_format() {
        let formatter = Formatter::new(OutputFormat::Json, false, Theme::Dark).with_theme(Theme::Light);
        assert_eq!(formatter.theme(), Theme::Light);
        assert_eq!(formatter.output_format(), OutputFormat::Json);
    }
}
