//! Application layer for storyloom
//!
//! This crate contains the story-generation use case and the port
//! definitions its adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GenerationError, LlmGateway, LlmSession, SetupError, StreamHandle},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::generate_story::{
    GenerateStoryError, GenerateStoryInput, GenerateStoryUseCase,
};
