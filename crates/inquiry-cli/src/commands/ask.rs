//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::{ChatSession, SendOutcome};
use inquiry_domain::{ChatTransport, SubmitRejection};

/// Execute the ask command.
pub async fn execute_ask<T: ChatTransport>(
    args: AskArgs,
    session: &mut ChatSession<T>,
    formatter: &Formatter,
) -> Result<()> {
    let question = args.question.join(" ");

    match session.send(&question).await {
        SendOutcome::Replied => {
            if let Some(reply) = session.last_reply() {
                println!("{}", formatter.format_message(reply)?);
            }
            Ok(())
        }
        SendOutcome::Failed(message) => Err(CliError::Request(message)),
        SendOutcome::Rejected(SubmitRejection::Empty) => {
            Err(CliError::InvalidInput("Question is empty".to_string()))
        }
        SendOutcome::Rejected(SubmitRejection::Busy) => Err(CliError::InvalidInput(
            "A request is already in progress".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use inquiry_domain::Theme;
    use inquiry_llm::MockTransport;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Raw, false, Theme::Dark)
    }

    #[tokio::test]
    async fn test_ask_joins_words_into_one_question() {
        let mut session = ChatSession::new(MockTransport::new("ok"), "sys", 10);
        let args = AskArgs {
            question: vec!["is".to_string(), "it".to_string(), "true?".to_string()],
        };
        execute_ask(args, &mut session, &formatter()).await.unwrap();

        let recorded = session.transport().last_request().unwrap();
        assert_eq!(recorded.messages[0].content(), "is it true?");
    }

    #[tokio::test]
    async fn test_ask_failure_is_request_error() {
        let mut transport = MockTransport::default();
        transport.add_error("q", "rate limited");
        let mut session = ChatSession::new(transport, "sys", 10);

        let err = execute_ask(AskArgs { question: vec!["q".to_string()] }, &mut session, &formatter())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Request(_)));
        assert_eq!(err.to_string(), "rate limited");
    }
}
