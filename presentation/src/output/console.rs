//! Console output formatter for stories and conversation history

use colored::Colorize;
use loom_domain::{Role, Transcript};

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a completed story.
    pub fn format_story(story: &str) -> String {
        format!("{}\n{}", "── Story ──".yellow().bold(), story)
    }

    /// Format the recent conversation history (display window only — the
    /// ledger itself is unbounded).
    pub fn format_history(transcript: &Transcript, window: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Conversation History".cyan().bold()));

        for msg in transcript.recent(window) {
            match msg.role {
                Role::User => {
                    output.push_str(&format!("{} {}\n", "You:".green().bold(), msg.content));
                }
                Role::Assistant => {
                    output.push_str(&format!("{} {}\n", "Gemini:".yellow().bold(), msg.content));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_shows_only_the_window() {
        colored::control::set_override(false);

        let mut transcript = Transcript::new();
        for i in 0..8 {
            transcript.commit(format!("u{i}"), format!("a{i}"));
        }

        let output = ConsoleFormatter::format_history(&transcript, 10);
        // 16 records total, window of 10 starts at u3
        assert!(!output.contains("u2"));
        assert!(output.contains("You: u3"));
        assert!(output.contains("Gemini: a7"));
    }

    #[test]
    fn short_history_is_shown_in_full() {
        colored::control::set_override(false);

        let mut transcript = Transcript::new();
        transcript.commit("first prompt", "first story");

        let output = ConsoleFormatter::format_history(&transcript, 10);
        assert!(output.contains("You: first prompt"));
        assert!(output.contains("Gemini: first story"));
    }
}
