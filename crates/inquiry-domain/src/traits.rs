//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::message::Message;
use std::future::Future;

/// One call to the completion endpoint
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Fixed system instruction
    pub system: &'a str,

    /// Full conversation history, oldest first
    pub messages: &'a [Message],

    /// Generation length cap
    pub max_tokens: u32,
}

/// Trait for the chat transport
///
/// Implemented by the infrastructure layer (inquiry-llm)
pub trait ChatTransport {
    /// Error type for transport operations; its `Display` is shown to the user
    type Error: std::fmt::Display;

    /// Send the conversation and return the assistant's reply text
    fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
