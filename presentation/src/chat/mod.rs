//! Interactive chat interface.

mod repl;
mod secret;

pub use repl::ChatRepl;
pub use secret::prompt_secret;
