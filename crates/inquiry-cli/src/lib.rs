//! Open Inquiry CLI library.
//!
//! This library provides the presentation shell for Open Inquiry: the chat
//! session driving requests, configuration, command execution, and the
//! terminal styling of rendered replies.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{ChatSession, SendOutcome};
