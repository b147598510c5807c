//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::suggestions::{suggestion, suggestion_list};
use crate::config::{data_dir, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::{ChatSession, SendOutcome};
use inquiry_domain::{ChatTransport, Message, SubmitRejection, Theme};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl<T: ChatTransport>(
    session: &mut ChatSession<T>,
    formatter: &Formatter,
    history_size: usize,
) -> Result<()> {
    let mut formatter = formatter.clone();

    println!("{}", formatter.info("Open Inquiry - Type /help for commands, /exit to quit"));
    println!();
    print_welcome(&formatter);

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("inquiry> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(&formatter),
                    Ok(ReplCommand::Legend) => println!("{}", formatter.legend_table()),
                    Ok(ReplCommand::Suggest(None)) => println!("{}", suggestion_list(&formatter)),
                    Ok(ReplCommand::Suggest(Some(number))) => match suggestion(number) {
                        Some(question) => match formatter.format_message(&Message::user(question)) {
                            Ok(echo) => {
                                println!("{}", echo);
                                ask(session, &formatter, question).await;
                            }
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        },
                        None => eprintln!(
                            "{}",
                            formatter.error(&format!("No suggestion numbered {}", number))
                        ),
                    },
                    Ok(ReplCommand::Theme(theme)) => {
                        let theme = theme.unwrap_or_else(|| formatter.theme().toggled());
                        formatter = formatter.with_theme(theme);
                        println!(
                            "{}",
                            formatter.success(&format!("Theme set to {}", theme.as_str()))
                        );
                    }
                    Ok(ReplCommand::Ask(question)) => ask(session, &formatter, &question).await,
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use /exit to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Send one question and print the outcome.
async fn ask<T: ChatTransport>(session: &mut ChatSession<T>, formatter: &Formatter, question: &str) {
    print!("{}", formatter.thinking());
    std::io::stdout().flush().ok();

    let outcome = session.send(question).await;

    print!("{}", formatter.clear_line());

    match outcome {
        SendOutcome::Replied => {
            let Some(reply) = session.last_reply() else {
                return;
            };
            match formatter.format_message(reply) {
                Ok(text) => {
                    println!();
                    println!("{}", text);
                    println!();
                    if formatter.output_format() == OutputFormat::Styled {
                        println!("{}", formatter.legend_line());
                        println!();
                    }
                }
                Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
            }
        }
        SendOutcome::Failed(message) => eprintln!("{}", formatter.error(&message)),
        SendOutcome::Rejected(SubmitRejection::Busy) => {
            eprintln!("{}", formatter.warning("Still waiting on the previous reply"))
        }
        SendOutcome::Rejected(SubmitRejection::Empty) => {}
    }
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Legend,
    Suggest(Option<usize>),
    Theme(Option<Theme>),
    Ask(String),
}

/// Parse a REPL command line. Anything not starting with `/` is a question.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let Some(command) = line.strip_prefix('/') else {
        return match line {
            "exit" | "quit" => Ok(ReplCommand::Exit),
            _ => Ok(ReplCommand::Ask(line.to_string())),
        };
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some(&name) = parts.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match name {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "legend" => Ok(ReplCommand::Legend),
        "suggest" => match parts.get(1) {
            None => Ok(ReplCommand::Suggest(None)),
            Some(arg) => arg.parse().map(|n| ReplCommand::Suggest(Some(n))).map_err(|_| {
                CliError::InvalidInput(format!("Usage: /suggest [1-5], got '{}'", arg))
            }),
        },
        "theme" => match parts.get(1) {
            None => Ok(ReplCommand::Theme(None)),
            Some(arg) => Theme::parse(arg).map(|t| ReplCommand::Theme(Some(t))).ok_or_else(|| {
                CliError::InvalidInput(format!("Unknown theme '{}'. Use dark or light.", arg))
            }),
        },
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: /{}. Type /help for available commands.",
            name
        ))),
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        e
    )))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_welcome(formatter: &Formatter) {
    println!("Ask anything. Every claim in the answer is labeled with how well it is supported.");
    println!();
    println!("{}", formatter.muted("Try one of these (/suggest N):"));
    println!("{}", suggestion_list(formatter));
    println!();
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <question>             - Ask a question");
    println!("  /suggest [N]           - List suggested questions, or ask number N");
    println!("  /legend                - Show the evidence tier legend");
    println!("  /theme [dark|light]    - Switch color theme (toggles without argument)");
    println!("  /help, /?              - Show this help");
    println!("  /exit, /quit           - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(
            parse_repl_command("what is dark matter?").unwrap(),
            ReplCommand::Ask("what is dark matter?".to_string())
        );
        assert_eq!(parse_repl_command("quit").unwrap(), ReplCommand::Exit);
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_repl_command("/exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("/help").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("/legend").unwrap(), ReplCommand::Legend);
        assert_eq!(parse_repl_command("/suggest").unwrap(), ReplCommand::Suggest(None));
        assert_eq!(parse_repl_command("/suggest 3").unwrap(), ReplCommand::Suggest(Some(3)));
        assert_eq!(parse_repl_command("/theme").unwrap(), ReplCommand::Theme(None));
        assert_eq!(
            parse_repl_command("/theme LIGHT").unwrap(),
            ReplCommand::Theme(Some(Theme::Light))
        );
    }

    #[test]
    fn test_bad_commands() {
        assert!(parse_repl_command("/").is_err());
        assert!(parse_repl_command("/suggest two").is_err());
        assert!(parse_repl_command("/theme sepia").is_err());
        assert!(parse_repl_command("/connect").is_err());
    }
}
