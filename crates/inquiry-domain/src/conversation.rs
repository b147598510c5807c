//! Conversation and chat state transitions
//!
//! The event loop owns exactly one [`ChatState`]. Each transition consumes the
//! state and returns the next one, so there is never more than one writer:
//!
//! ```text
//! idle --submit--> loading --receive--> idle (assistant message appended)
//!                          \--fail----> idle (error recorded, nothing appended)
//! ```
//!
//! # Examples
//!
//! ```
//! use inquiry_domain::{ChatState, SubmitOutcome};
//!
//! let (state, outcome) = ChatState::new().submit("  what is ball lightning?  ");
//! assert_eq!(outcome, SubmitOutcome::Accepted);
//! assert!(state.is_loading());
//! assert_eq!(state.messages()[0].content(), "what is ball lightning?");
//!
//! let state = state.receive("HYPOTHESIS — plasma");
//! assert!(!state.is_loading());
//! assert_eq!(state.messages().len(), 2);
//! ```

use crate::message::Message;

/// Append-only sequence of messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True before the first message
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input was empty after trimming
    Empty,

    /// A request is already outstanding
    Busy,
}

/// Result of [`ChatState::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user message was appended and a request should be issued
    Accepted,

    /// Nothing changed
    Rejected(SubmitRejection),
}

/// Application state owned by the event loop
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    conversation: Conversation,
    loading: bool,
    error: Option<String>,
}

impl ChatState {
    /// Fresh state: no messages, idle, no error
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept user input
    ///
    /// Input is trimmed. Empty input, or input while a request is
    /// outstanding, leaves the state untouched. Otherwise the user message is
    /// appended, any previous error is cleared, and the state becomes loading.
    pub fn submit(mut self, input: &str) -> (Self, SubmitOutcome) {
        let text = input.trim();
        if text.is_empty() {
            return (self, SubmitOutcome::Rejected(SubmitRejection::Empty));
        }
        if self.loading {
            return (self, SubmitOutcome::Rejected(SubmitRejection::Busy));
        }

        self.conversation.push(Message::user(text));
        self.loading = true;
        self.error = None;
        (self, SubmitOutcome::Accepted)
    }

    /// Record the reply to the outstanding request
    ///
    /// Ignored when no request is outstanding.
    pub fn receive(mut self, reply: impl Into<String>) -> Self {
        if !self.loading {
            return self;
        }
        self.conversation.push(Message::assistant(reply));
        self.loading = false;
        self
    }

    /// Record the failure of the outstanding request
    ///
    /// The conversation is left as it was (the user message stays, no
    /// assistant message is added). Ignored when no request is outstanding.
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        if !self.loading {
            return self;
        }
        self.error = Some(message.into());
        self.loading = false;
        self
    }

    /// The conversation so far
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Messages in order, as sent to the transport
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// True while a request is outstanding (send control disabled)
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the most recent failed request
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
