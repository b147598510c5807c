//! Suggested questions.

use crate::error::Result;
use crate::output::Formatter;

/// Questions offered on an empty conversation.
pub const SUGGESTIONS: [&str; 5] = [
    "What do we actually know about UAP sightings?",
    "Is there evidence for consciousness outside the brain?",
    "What's the real story on placebo effects?",
    "Are there credible reports of ball lightning?",
    "What does science say about near-death experiences?",
];

/// Numbered suggestion list, one per line.
pub fn suggestion_list(formatter: &Formatter) -> String {
    SUGGESTIONS
        .iter()
        .enumerate()
        .map(|(i, suggestion)| format!("  {} {}", formatter.muted(&format!("{}.", i + 1)), suggestion))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a suggestion by its 1-based number.
pub fn suggestion(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|i| SUGGESTIONS.get(i)).copied()
}

/// Execute the suggestions command.
pub async fn execute_suggestions(formatter: &Formatter) -> Result<()> {
    println!("{}", suggestion_list(formatter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use inquiry_domain::Theme;

    #[test]
    fn test_suggestion_numbers_are_one_based() {
        assert_eq!(suggestion(1), Some(SUGGESTIONS[0]));
        assert_eq!(suggestion(5), Some(SUGGESTIONS[4]));
        assert_eq!(suggestion(0), None);
        assert_eq!(suggestion(6), None);
    }

    #[test]
    fn test_suggestion_echo_uses_user_styling() {
        let formatter = Formatter::new(OutputFormat::Styled, false, Theme::Dark);
        let echo = formatter
            .format_message(&inquiry_domain::Message::user(SUGGESTIONS[2]))
            .unwrap();
        assert_eq!(echo, "› What's the real story on placebo effects?");
    }

    #[test]
    fn test_suggestion_list() {
        let formatter = Formatter::new(OutputFormat::Styled, false, Theme::Dark);
        let list = suggestion_list(&formatter);
        assert_eq!(list.lines().count(), SUGGESTIONS.len());
        assert!(list.starts_with("  1. What do we actually know"));
    }
}
