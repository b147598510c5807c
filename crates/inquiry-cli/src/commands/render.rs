//! Render command implementation.

use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inquiry_domain::Message;
use std::fs;
use std::io::{self, Read};

/// Execute the render command.
pub async fn execute_render(args: RenderArgs, formatter: &Formatter) -> Result<()> {
    // Read model output from file or stdin
    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either a file or --stdin".to_string(),
        ));
    };

    println!("{}", render_text(&text, formatter)?);

    Ok(())
}

/// Format model output read from a file as an assistant reply.
///
/// A single trailing newline is the file's terminator, not a blank line.
pub fn render_text(text: &str, formatter: &Formatter) -> Result<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    formatter.format_message(&Message::assistant(text))
}
