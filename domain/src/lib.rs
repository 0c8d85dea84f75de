//! Domain layer for storyloom
//!
//! This crate contains the core entities and value objects for the story
//! generation loop. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The append-only conversation ledger. It only ever records complete
//! exchanges: a user prompt paired with a fully assembled assistant
//! response. A failed generation attempt never touches it.
//!
//! ## StreamEvent
//!
//! One incremental unit of a streamed model response. A fragment may carry
//! text or may be metadata-only; consumers must match on the variant rather
//! than probing for an optional field.

pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use crate::core::{error::DomainError, model::Model};
pub use prompt::PromptTemplate;
pub use session::{
    entities::{Message, Role, Transcript},
    stream::StreamEvent,
};
