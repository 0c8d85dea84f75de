//! Conversation session domain.
//!
//! - [`entities::Message`] — a single role-tagged message
//! - [`entities::Transcript`] — the append-only conversation ledger
//! - [`stream::StreamEvent`] — one unit of a streamed model response

pub mod entities;
pub mod stream;
