//! Open Inquiry Renderer
//!
//! Turns model-generated text into structured presentation fragments.
//!
//! # Overview
//!
//! The model is prompted to label claims with an evidence tier and to follow
//! each claim with an inline citation. This crate recognizes that markup, line
//! by line, and produces a tagged structure the presentation shell can style
//! without parsing anything itself.
//!
//! # Architecture
//!
//! ```text
//! Message → render_message → split on '\n' → classify_line → extract_segments
//! ```
//!
//! Everything here is a pure function of its input: no state, no I/O, no
//! error type. Text that does not match a pattern falls through to the next
//! one and ends up as plain prose.
//!
//! # Example Usage
//!
//! ```
//! use inquiry_domain::{Message, Tier};
//! use inquiry_render::{render_message, CitationVariant, RenderedLine, RenderedMessage, Segment};
//!
//! let reply = Message::assistant("VERIFIED — The sky is blue [Source: NASA, 2020]");
//! let RenderedMessage::Assistant { lines } = render_message(&reply) else {
//!     unreachable!()
//! };
//!
//! assert_eq!(
//!     lines[0],
//!     RenderedLine::TierBlock {
//!         tier: Tier::Verified,
//!         segments: vec![
//!             Segment::text("The sky is blue "),
//!             Segment::Citation {
//!                 raw: "NASA, 2020".to_string(),
//!                 variant: CitationVariant::Generic,
//!             },
//!         ],
//!     }
//! );
//! ```

#![warn(missing_docs)]

mod citation;
mod line;
mod renderer;

pub use citation::{extract_segments, CitationVariant, Segment};
pub use line::{classify_line, LineKind, RenderedLine};
pub use renderer::{render_message, render_text, RenderedMessage};
