//! Render whole messages

use crate::line::{classify_line, RenderedLine};
use inquiry_domain::{Message, Role};
use serde::Serialize;

/// Presentation structure for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RenderedMessage {
    /// User input, shown verbatim
    User {
        /// The text exactly as submitted
        text: String,
    },

    /// Model reply, one entry per line
    Assistant {
        /// Classified lines in order
        lines: Vec<RenderedLine>,
    },
}

/// Render a message
///
/// User text is never parsed, so input that happens to look like markup is
/// shown as typed.
pub fn render_message(message: &Message) -> RenderedMessage {
    match message.role() {
        Role::User => RenderedMessage::User {
            text: message.content().to_string(),
        },
        Role::Assistant => RenderedMessage::Assistant {
            lines: render_text(message.content()),
        },
    }
}

/// Classify every line of model output
///
/// Splits on `\n` only; no wrapping or re-flowing. Empty text yields a single
/// blank line.
pub fn render_text(text: &str) -> Vec<RenderedLine> {
    text.split('\n').map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;

    #[test]
    fn test_user_message_is_verbatim() {
        let message = Message::user("VERIFIED — I typed this [Source: me]");
        assert_eq!(
            render_message(&message),
            RenderedMessage::User {
                text: "VERIFIED — I typed this [Source: me]".to_string()
            }
        );
    }

    #[test]
    fn test_assistant_message_lines() {
        let message = Message::assistant("VERIFIED — ok [Source: X, 2021]\n\nOpen Questions — none");
        let RenderedMessage::Assistant { lines } = render_message(&message) else {
            panic!("expected assistant rendering");
        };
        let kinds: Vec<_> = lines.iter().map(RenderedLine::kind).collect();
        assert_eq!(kinds, vec![LineKind::TierBlock, LineKind::Blank, LineKind::Plain]);
    }

    #[test]
    fn test_empty_content_is_single_blank_line() {
        assert_eq!(render_text(""), vec![RenderedLine::Blank]);
    }

    #[test]
    fn test_trailing_newline_adds_blank_line() {
        let lines = render_text("# Title\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], RenderedLine::Blank);
    }

    #[test]
    fn test_citation_does_not_span_lines() {
        let lines = render_text("claim [Source: split\nacross]");
        assert!(lines.iter().all(|line| line.segments().iter().all(|s| !s.is_citation())));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(render_message(&Message::user("hi"))).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "text": "hi"}));
    }
}
