//! Presentation layer for storyloom
//!
//! This crate contains the CLI definition, the interactive chat REPL,
//! output formatting, and progress reporting.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, prompt_secret};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
