//! Open Inquiry Domain Layer
//!
//! This crate defines the fundamental concepts of the Open Inquiry chat client.
//! It has ZERO external dependencies and holds plain data plus pure state
//! transitions; rendering, networking and presentation live in other crates.
//!
//! ## Key Concepts
//!
//! - **Tier**: One of six confidence labels a model attaches to a claim
//! - **Message**: A single user or assistant turn, immutable once created
//! - **Conversation**: Append-only, in-memory sequence of messages
//! - **ChatState**: The one state container the event loop owns, advanced by
//!   `submit`, `receive` and `fail`
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all external interactions (see [`traits`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conversation;
pub mod message;
pub mod palette;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use conversation::{ChatState, Conversation, SubmitOutcome, SubmitRejection};
pub use message::{Message, Role};
pub use palette::{Rgb, Theme};
pub use tier::Tier;
pub use traits::{ChatTransport, CompletionRequest};
