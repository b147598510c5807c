//! Open Inquiry Chat Transport Layer
//!
//! Implementations of the `ChatTransport` trait from `inquiry-domain`.
//!
//! # Transports
//!
//! - `MockTransport`: Deterministic mock for testing
//! - `MessagesTransport`: HTTP client for a hosted messages endpoint
//!
//! # Examples
//!
//! ```
//! use inquiry_domain::{ChatTransport, CompletionRequest, Message};
//! use inquiry_llm::MockTransport;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = MockTransport::new("VERIFIED — hello");
//! let history = [Message::user("hi")];
//! let request = CompletionRequest { system: "", messages: &history, max_tokens: 16 };
//! assert_eq!(transport.complete(request).await.unwrap(), "VERIFIED — hello");
//! # }
//! ```

#![warn(missing_docs)]

pub mod messages;
pub mod prompt;

use inquiry_domain::{ChatTransport, CompletionRequest, Message};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use messages::{MessagesTransport, TransportConfig, FALLBACK_REPLY};
pub use prompt::{build_system_prompt, SYSTEM_PROMPT};

/// Errors that can occur while talking to the completion endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    /// Error object returned by the endpoint; the message is shown verbatim
    #[error("{0}")]
    Api(String),

    /// Network or HTTP-level failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transport could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else if e.is_builder() {
            LlmError::Config(e.to_string())
        } else {
            LlmError::Communication(e.to_string())
        }
    }
}

/// A request as seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// System instruction
    pub system: String,
    /// History sent with the request
    pub messages: Vec<Message>,
    /// Generation cap
    pub max_tokens: u32,
}

/// Mock transport for deterministic testing
///
/// Replies are looked up by the content of the last message in the request;
/// anything unmatched gets the default reply. No network calls are made.
///
/// # Examples
///
/// ```
/// use inquiry_llm::MockTransport;
///
/// let mut transport = MockTransport::default();
/// transport.add_response("ping", "pong");
/// transport.add_error("boom", "Overloaded");
/// assert_eq!(transport.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockTransport {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a mock with a fixed reply for every request
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with `response` when the last message is `prompt`
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Ok(response.into()));
    }

    /// Fail with an API error carrying `message` when the last message is `prompt`
    pub fn add_error(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Err(message.into()));
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl ChatTransport for MockTransport {
    type Error = LlmError;

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, Self::Error> {
        lock(&self.requests).push(RecordedRequest {
            system: request.system.to_string(),
            messages: request.messages.to_vec(),
            max_tokens: request.max_tokens,
        });

        let prompt = request.messages.last().map(Message::content).unwrap_or_default();
        match lock(&self.responses).get(prompt) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(LlmError::Api(message.clone())),
            None => Ok(self.default_response.clone()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(history: &[Message]) -> CompletionRequest<'_> {
        CompletionRequest {
            system: "sys",
            messages: history,
            max_tokens: 100,
        }
    }

    #[tokio::test]
    async fn test_mock_transport_default() {
        let transport = MockTransport::new("Test response");
        let history = [Message::user("any prompt")];
        let result = transport.complete(request(&history)).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_transport_specific_responses() {
        let mut transport = MockTransport::default();
        transport.add_response("hello", "world");
        transport.add_response("foo", "bar");

        let hello = [Message::user("hello")];
        let foo = [Message::user("foo")];
        let unknown = [Message::user("unknown")];
        assert_eq!(transport.complete(request(&hello)).await.unwrap(), "world");
        assert_eq!(transport.complete(request(&foo)).await.unwrap(), "bar");
        assert_eq!(
            transport.complete(request(&unknown)).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new("ok");
        assert_eq!(transport.call_count(), 0);
        assert!(transport.last_request().is_none());

        let history = [Message::user("q1"), Message::assistant("a1"), Message::user("q2")];
        transport.complete(request(&history)).await.unwrap();

        assert_eq!(transport.call_count(), 1);
        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.system, "sys");
        assert_eq!(recorded.messages, history.to_vec());
        assert_eq!(recorded.max_tokens, 100);
    }

    #[tokio::test]
    async fn test_mock_transport_error() {
        let mut transport = MockTransport::default();
        transport.add_error("bad prompt", "Overloaded");

        let history = [Message::user("bad prompt")];
        let err = transport.complete(request(&history)).await.unwrap_err();
        assert!(matches!(err, LlmError::Api(_)));
        assert_eq!(err.to_string(), "Overloaded");
    }

    #[tokio::test]
    async fn test_mock_transport_clone_shares_state() {
        let transport1 = MockTransport::new("test");
        let transport2 = transport1.clone();

        let history = [Message::user("x")];
        transport1.complete(request(&history)).await.unwrap();

        assert_eq!(transport1.call_count(), 1);
        assert_eq!(transport2.call_count(), 1);
    }
}
