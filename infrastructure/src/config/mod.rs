//! Configuration: file-based settings and credential resolution.

mod credentials;
mod file_config;
mod loader;

pub use credentials::Credential;
pub use file_config::{ConfigValidationError, FileConfig};
pub use loader::ConfigLoader;
