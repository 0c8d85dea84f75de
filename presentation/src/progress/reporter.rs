//! Progress reporting for story generation

use indicatif::{ProgressBar, ProgressStyle};
use loom_application::ProgressNotifier;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Reports generation progress: a spinner while waiting for the first
/// fragment, then raw incremental output as fragments arrive.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stream_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Gemini is crafting your story...");
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_chunk(&self, text: &str) {
        self.clear_spinner();
        print!("{text}");
        let _ = std::io::stdout().flush();
    }

    fn on_stream_end(&self) {
        self.clear_spinner();
        println!();
    }
}
