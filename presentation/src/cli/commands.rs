//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for storyloom
#[derive(Parser, Debug)]
#[command(name = "storyloom")]
#[command(author, version, about = "Iterative AI writing assistant backed by Google Gemini")]
#[command(long_about = r#"
Storyloom turns a short creative prompt into a narrative-rich story using
Google's Gemini models, streaming the response as it is generated and
keeping a rolling conversation history for the session.

The API key is read from GEMINI_API_KEY (or GOOGLE_API_KEY); if neither is
set you are prompted for one, masked, before anything else runs.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./storyloom.toml    Project-level config
3. ~/.config/storyloom/config.toml   Global config

Example:
  storyloom "a robot who learns empathy"
  storyloom --chat -m gemini-1.5-pro
"#)]
pub struct Cli {
    /// The creative prompt to expand into a story (not required in chat mode)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to generate with (gemini-1.5-flash or gemini-1.5-pro)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and incremental output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Append each completed exchange to a JSONL conversation log
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_shot_invocation() {
        let cli = Cli::parse_from(["storyloom", "a haunted lighthouse", "-m", "gemini-1.5-pro"]);
        assert_eq!(cli.prompt.as_deref(), Some("a haunted lighthouse"));
        assert_eq!(cli.model.as_deref(), Some("gemini-1.5-pro"));
        assert!(!cli.chat);
    }

    #[test]
    fn parses_chat_mode_without_prompt() {
        let cli = Cli::parse_from(["storyloom", "--chat", "-vv", "-q"]);
        assert!(cli.chat);
        assert!(cli.prompt.is_none());
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
