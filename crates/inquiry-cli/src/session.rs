//! Chat session: the event-loop owner of the chat state.
//!
//! A session pairs the single [`ChatState`] with a transport and drives the
//! `submit → receive | fail` transitions around each request. Requests are
//! awaited one at a time; the state refuses a second submit while one is in
//! flight.

use inquiry_domain::{
    ChatState, ChatTransport, CompletionRequest, Message, SubmitOutcome, SubmitRejection,
};
use tracing::{debug, info, warn};

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// An assistant message was appended
    Replied,

    /// The request failed; the message is shown to the user verbatim
    Failed(String),

    /// The input was not sent
    Rejected(SubmitRejection),
}

/// A conversation bound to a transport.
pub struct ChatSession<T> {
    transport: T,
    state: ChatState,
    system_prompt: String,
    max_tokens: u32,
}

impl<T: ChatTransport> ChatSession<T> {
    /// Create a session with an empty conversation.
    pub fn new(transport: T, system_prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            transport,
            state: ChatState::new(),
            system_prompt: system_prompt.into(),
            max_tokens,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Most recent assistant message.
    pub fn last_reply(&self) -> Option<&Message> {
        self.state
            .messages()
            .iter()
            .rev()
            .find(|message| !message.is_user())
    }

    /// Submit user input and wait for the reply.
    pub async fn send(&mut self, input: &str) -> SendOutcome {
        let (state, outcome) = std::mem::take(&mut self.state).submit(input);
        if let SubmitOutcome::Rejected(reason) = outcome {
            debug!(?reason, "Input not sent");
            self.state = state;
            return SendOutcome::Rejected(reason);
        }

        let result = {
            let request = CompletionRequest {
                system: &self.system_prompt,
                messages: state.messages(),
                max_tokens: self.max_tokens,
            };
            debug!(history = request.messages.len(), "Request issued");
            self.transport.complete(request).await
        };

        match result {
            Ok(reply) => {
                info!(chars = reply.len(), "Reply received");
                self.state = state.receive(reply);
                SendOutcome::Replied
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "Request failed");
                self.state = state.fail(message.clone());
                SendOutcome::Failed(message)
            }
        }
    }
}
