//! Use cases — application workflows over the ports.

pub mod generate_story;
