//! Core domain types: errors and the model value object.

pub mod error;
pub mod model;
