//! indicatif spinner shown while a package manager runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::RedeyeTheme;
use super::SpinnerHandle;

pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.red} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Draws nothing; used in silent mode.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Replace the spinner line with a final status line.
    fn settle(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.settle(RedeyeTheme::detect().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.settle(RedeyeTheme::detect().format_error(msg));
    }
}
