//! Masked secret entry.
//!
//! Terminal equivalent of a password field: each typed character echoes as
//! an asterisk. Entry loops until a non-empty secret is provided — a
//! missing credential is a blocking precondition, not an error.

use rustyline::config::Configurer;
use rustyline::highlight::Highlighter;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, Completer, Editor, Helper, Hinter, Validator};
use std::borrow::Cow::{self, Owned};

#[derive(Completer, Helper, Hinter, Validator)]
struct MaskingHighlighter;

impl Highlighter for MaskingHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        // Rehighlight on every keystroke so the mask tracks the input
        true
    }
}

/// Prompt for a secret with masked echo, looping until non-empty.
///
/// Returns an error only if the terminal itself fails (EOF, interrupt).
pub fn prompt_secret(prompt: &str) -> rustyline::Result<String> {
    let mut rl: Editor<MaskingHighlighter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(MaskingHighlighter));
    rl.set_color_mode(ColorMode::Forced);
    rl.set_auto_add_history(false);

    loop {
        let line = rl.readline(prompt)?;
        let secret = line.trim();
        if !secret.is_empty() {
            return Ok(secret.to_string());
        }
        println!("An API key is required to continue.");
    }
}
