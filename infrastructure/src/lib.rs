//! Infrastructure layer for storyloom
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Gemini HTTP gateway, configuration file loading,
//! credential resolution, and the JSONL conversation logger.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, Credential, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::gemini::GeminiGateway;
