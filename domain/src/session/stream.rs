//! Streaming events for model session communication.
//!
//! [`StreamEvent`] represents individual fragments in a streaming model
//! response, enabling incremental display of output as it is generated.
//!
//! A fragment may legitimately carry no text (safety metadata, usage
//! counters); such fragments are [`StreamEvent::Metadata`] and must be
//! skipped by consumers without error. Modeling the distinction as enum
//! variants forces every consumer to handle the text-less case explicitly.

/// An event in a streaming model response.
///
/// Bridges infrastructure-level streaming (SSE chunks from the Gemini API)
/// to the application layer's assembly loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment from the model.
    Delta(String),
    /// A fragment carrying no text payload. Contributes nothing to the
    /// assembled response.
    Metadata,
    /// Normal end of the stream.
    Completed,
    /// A fault during streaming. Terminal for the attempt.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed | StreamEvent::Error(_))
    }
}
