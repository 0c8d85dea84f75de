//! REPL (Read-Eval-Print Loop) for interactive story writing

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use loom_application::{
    GenerateStoryInput, GenerateStoryUseCase, LlmGateway, NoProgress,
};
use loom_domain::{Model, Transcript};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive story-writing REPL
///
/// Owns the session state: the transcript lives for the lifetime of one
/// `run()` call and is torn down with it.
pub struct ChatRepl {
    use_case: GenerateStoryUseCase,
    model: Model,
    history_display: usize,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            use_case: GenerateStoryUseCase::new(gateway),
            model,
            history_display: 10,
            show_progress: true,
        }
    }

    /// Replace the use case (to adjust pacing or attach a conversation log)
    pub fn with_use_case(mut self, use_case: GenerateStoryUseCase) -> Self {
        self.use_case = use_case;
        self
    }

    /// Set whether to show the spinner and incremental output
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set how many history records the display window shows
    pub fn with_history_display(mut self, n: usize) -> Self {
        self.history_display = n;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load readline history
        let history_path = dirs::data_dir().map(|p| p.join("storyloom").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let mut transcript = Transcript::new();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line, &transcript) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_prompt(line, &mut transcript).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save readline history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Storyloom - Writing Assistant        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!();
        println!("Type a creative prompt and the model writes the story.");
        println!("Try: a poem's narrator losing their shadow, dialogue for");
        println!("a heist gone sideways, lyrics about a vanished city.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /models   - Show supported models");
        println!("  /history  - Show recent conversation history");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str, transcript: &Transcript) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /models          - Show supported models");
                println!("  /history         - Show recent conversation history");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/models" => {
                println!();
                println!("Supported models:");
                for model in Model::all() {
                    let marker = if model == self.model { " (active)" } else { "" };
                    println!("  - {}{}", model, marker);
                }
                println!();
                false
            }
            "/history" => {
                println!();
                if transcript.is_empty() {
                    println!("No exchanges yet.");
                } else {
                    print!(
                        "{}",
                        ConsoleFormatter::format_history(transcript, self.history_display)
                    );
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_prompt(&self, prompt: &str, transcript: &mut Transcript) {
        println!();

        let input = GenerateStoryInput::new(prompt, self.model);

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute(input, transcript, &progress).await
        } else {
            self.use_case.execute(input, transcript, &NoProgress).await
        };

        match result {
            Ok(story) => {
                if !self.show_progress {
                    // Nothing was rendered incrementally; print the story now
                    println!("{}", ConsoleFormatter::format_story(&story));
                }
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_history(transcript, self.history_display)
                );
            }
            Err(e) => {
                eprintln!("{}", e.to_string().red());
            }
        }
        println!();
    }
}
