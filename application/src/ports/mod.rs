//! Ports — interfaces the infrastructure layer implements.

pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
