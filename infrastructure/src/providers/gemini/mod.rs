//! Google Gemini provider.
//!
//! Implements the [`LlmGateway`](loom_application::LlmGateway) and
//! [`LlmSession`](loom_application::LlmSession) ports over the Gemini
//! `streamGenerateContent` REST endpoint with SSE streaming.

mod gateway;
mod session;
mod types;

pub use gateway::GeminiGateway;
pub use session::GeminiSession;
