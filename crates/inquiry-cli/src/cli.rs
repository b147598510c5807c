//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Open Inquiry - evidence-tiered, source-cited research chat.
#[derive(Debug, Parser)]
#[command(name = "inquiry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum, global = true)]
    pub theme: Option<ThemeArg>,

    /// Model identifier
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Messages endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API key for the messages endpoint
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Annotated, colored output (default)
    Styled,
    /// Rendered structure as JSON
    Json,
    /// Reply text only
    Raw,
}

/// Theme options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeArg {
    /// Dark background
    Dark,
    /// Light background
    Light,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive chat mode
    Chat,

    /// Ask a single question and print the annotated reply
    Ask(AskArgs),

    /// Render model output without contacting the endpoint
    Render(RenderArgs),

    /// Show the evidence tier legend
    Legend,

    /// List suggested questions
    Suggestions,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// File containing model output
    #[arg(conflicts_with = "stdin")]
    pub file: Option<String>,

    /// Read model output from stdin
    #[arg(long)]
    pub stdin: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Styled => crate::config::OutputFormat::Styled,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Raw => crate::config::OutputFormat::Raw,
        }
    }
}

impl From<ThemeArg> for inquiry_domain::Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => inquiry_domain::Theme::Dark,
            ThemeArg::Light => inquiry_domain::Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::parse_from(["inquiry"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_ask_command_joins_words() {
        let cli = Cli::parse_from(["inquiry", "ask", "what", "is", "a", "prion?"]);
        match cli.command {
            Some(Command::Ask(args)) => assert_eq!(args.question.join(" "), "what is a prion?"),
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["inquiry", "ask"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "inquiry", "render", "--stdin", "--theme", "light", "--format", "json", "--no-color",
        ]);
        assert!(matches!(cli.theme, Some(ThemeArg::Light)));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        match cli.command {
            Some(Command::Render(args)) => assert!(args.stdin),
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_theme_conversion() {
        let theme: inquiry_domain::Theme = ThemeArg::Light.into();
        assert_eq!(theme, inquiry_domain::Theme::Light);
    }
}
