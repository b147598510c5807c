//! Messages Endpoint Transport
//!
//! Sends the whole conversation to a hosted messages endpoint and returns the
//! text of the first content item of the reply.
//!
//! # Wire format
//!
//! ```text
//! POST {endpoint}
//! content-type: application/json
//! anthropic-version: 2023-06-01
//! x-api-key: ...            (only when a key is configured)
//!
//! {"model": "...", "max_tokens": 1500, "system": "...",
//!  "messages": [{"role": "user", "content": "..."}, ...]}
//! ```
//!
//! The reply is either `{"content": [{"type": "text", "text": "..."}], ...}` or
//! `{"error": {"type": "...", "message": "..."}}`. An error object becomes
//! [`LlmError::Api`] with the message verbatim. A reply without text becomes
//! [`FALLBACK_REPLY`].
//!
//! Each call is a single attempt: no retries, no backoff.
//!
//! # Examples
//!
//! ```no_run
//! use inquiry_llm::{MessagesTransport, TransportConfig};
//!
//! let transport = MessagesTransport::new(TransportConfig {
//!     api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
//!     ..TransportConfig::default()
//! })
//! .expect("valid transport config");
//! ```

use crate::LlmError;
use inquiry_domain::{ChatTransport, CompletionRequest, Message};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default messages endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Default model
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default generation cap
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Default timeout for a single request (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// API version header value
pub const API_VERSION: &str = "2023-06-01";

/// Reply used when the endpoint returns no text
pub const FALLBACK_REPLY: &str = "No response.";

/// Settings for [`MessagesTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Full URL of the messages endpoint
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP transport for a hosted messages endpoint
pub struct MessagesTransport {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

/// Request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response body; both fields are optional on the wire
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentItem>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl MessagesTransport {
    /// Create a transport
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint,
            model: config.model,
            api_key: config.api_key,
            client,
        })
    }

    /// Endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one request and return the reply text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached
    /// - The endpoint returns an error object
    /// - The body is not a messages response
    pub async fn send(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let body = build_request_body(&self.model, request);
        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let reply = interpret_reply(status, &text);
        if let Err(e) = &reply {
            warn!(status = %status, error = %e, "Completion request failed");
        }
        reply
    }
}

impl ChatTransport for MessagesTransport {
    type Error = LlmError;

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, Self::Error> {
        self.send(request).await
    }
}

fn build_request_body<'a>(model: &'a str, request: CompletionRequest<'a>) -> MessagesRequest<'a> {
    MessagesRequest {
        model,
        max_tokens: request.max_tokens,
        system: request.system,
        messages: request.messages.iter().map(wire_message).collect(),
    }
}

fn wire_message(message: &Message) -> WireMessage<'_> {
    WireMessage {
        role: message.role().as_str(),
        content: message.content(),
    }
}

/// Turn a raw HTTP reply into the assistant's text
///
/// An error object wins over the status code, so the endpoint's own message
/// reaches the user.
fn interpret_reply(status: StatusCode, body: &str) -> Result<String, LlmError> {
    let parsed: MessagesResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) if status.is_success() => {
            return Err(LlmError::InvalidResponse(format!(
                "Failed to parse response: {}",
                e
            )));
        }
        Err(_) => {
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }
    };

    if let Some(error) = parsed.error {
        let message = if error.message.is_empty() {
            format!("Request failed (HTTP {})", status)
        } else {
            error.message
        };
        return Err(LlmError::Api(message));
    }

    if !status.is_success() {
        return Err(LlmError::Communication(format!("HTTP {}", status)));
    }

    Ok(parsed
        .content
        .into_iter()
        .next()
        .and_then(|item| item.text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string()))
}
