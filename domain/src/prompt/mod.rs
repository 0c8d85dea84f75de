//! Prompt composition.

mod template;

pub use template::PromptTemplate;
