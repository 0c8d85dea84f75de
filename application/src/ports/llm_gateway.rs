//! LLM gateway port
//!
//! Defines how the application layer talks to the remote generation
//! service. Session construction and generation have deliberately separate
//! error types: a [`SetupError`] aborts an attempt before any remote call,
//! while a [`GenerationError`] is a fault of the streaming exchange itself.
//! Neither ever reaches the transcript.

use async_trait::async_trait;
use loom_domain::{Message, Model, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors constructing a model session. These occur before any content is
/// sent and the caller must abort the attempt without touching the ledger.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("No API key provided")]
    MissingCredential,

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors during a streaming generation exchange. Terminal for the current
/// attempt: no retry, no partial result.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),

    #[error("Transport closed")]
    TransportClosed,
}

/// Gateway for model session construction
///
/// This port is the Model Session Factory: given a model identifier it
/// attempts to construct an authenticated session handle. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session bound to the specified model.
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, SetupError>;

    /// Models this gateway can serve.
    fn available_models(&self) -> Vec<Model>;
}

/// An active model session
///
/// A session is a transient capability: owned by exactly one generation
/// attempt and discarded after use, never cached or reused.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// The model this session is bound to.
    fn model(&self) -> &Model;

    /// Send a prompt with the given conversational context and receive the
    /// response as a stream of fragments.
    ///
    /// `history` is the full transcript at call time; the returned handle
    /// yields a lazy, finite, non-restartable sequence of [`StreamEvent`]s.
    async fn send_streaming(
        &self,
        history: &[Message],
        prompt: &str,
    ) -> Result<StreamHandle, GenerationError>;
}

/// Handle for receiving streaming events from a model session.
///
/// Wraps a bounded `mpsc::Receiver<StreamEvent>`: the adapter's network
/// task produces into the channel while the assembly loop consumes from it.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Receive the next fragment, or `None` once the stream is exhausted.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }

    /// Consume the stream and collect all delta text into a single string.
    ///
    /// Convenience for callers that want transport-level streaming but only
    /// need the final text.
    pub async fn collect_text(mut self) -> Result<String, GenerationError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Metadata => {}
                StreamEvent::Completed => return Ok(full_text),
                StreamEvent::Error(e) => return Err(GenerationError::StreamInterrupted(e)),
            }
        }
        // Channel closed without a Completed marker — normal exhaustion
        Ok(full_text)
    }
}
