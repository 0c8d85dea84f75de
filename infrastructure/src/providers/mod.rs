//! Provider adapters for remote generation services.

pub mod gemini;
