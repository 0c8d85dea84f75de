//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown model: {0} (supported: gemini-1.5-flash, gemini-1.5-pro)")]
    UnknownModel(String),
}
