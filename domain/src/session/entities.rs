//! Session domain entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
///
/// Immutable once created; messages are only ever appended to a
/// [`Transcript`] in complete user/assistant pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The conversation ledger for one session (Entity)
///
/// Append-only and insertion-ordered. Records are committed in pairs (user
/// prompt, then assistant response) and only after a generation attempt has
/// fully succeeded — a failed attempt must never leave a partial exchange
/// behind. Nothing is ever deleted; older records merely fall out of the
/// display window returned by [`Transcript::recent`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full ledger in insertion order.
    ///
    /// This is what feeds the next generation attempt as conversational
    /// context — the full history, not the truncated display window.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append one complete exchange: the user prompt, then the assistant
    /// response. Only called after a generation attempt succeeds.
    pub fn commit(&mut self, user_text: impl Into<String>, assistant_text: impl Into<String>) {
        self.messages.push(Message::user(user_text));
        self.messages.push(Message::assistant(assistant_text));
    }

    /// The last `n` records in insertion order (all of them if the ledger
    /// holds fewer than `n`). Used for display only.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_appends_user_then_assistant() {
        let mut transcript = Transcript::new();
        transcript.commit("a robot who learns empathy", "Once upon a time");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role, Role::User);
        assert_eq!(transcript.messages()[0].content, "a robot who learns empathy");
        assert_eq!(transcript.messages()[1].role, Role::Assistant);
        assert_eq!(transcript.messages()[1].content, "Once upon a time");
    }

    #[test]
    fn commits_alternate_starting_with_user() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.commit(format!("prompt {i}"), format!("story {i}"));
        }

        assert_eq!(transcript.len(), 10);
        for (i, msg) in transcript.messages().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(msg.role, expected);
        }
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let mut transcript = Transcript::new();
        for i in 0..15 {
            transcript.commit(format!("u{i}"), format!("a{i}"));
        }
        assert_eq!(transcript.len(), 30);

        let window = transcript.recent(10);
        assert_eq!(window.len(), 10);
        // Records 21-30: exchanges 10 through 14
        assert_eq!(window[0].content, "u10");
        assert_eq!(window[9].content, "a14");
    }

    #[test]
    fn recent_on_short_ledger_returns_everything() {
        let mut transcript = Transcript::new();
        transcript.commit("u0", "a0");
        transcript.commit("u1", "a1");

        let window = transcript.recent(10);
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].content, "u0");
        assert_eq!(window[3].content, "a1");
    }

    #[test]
    fn message_serde_uses_lowercase_roles() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
