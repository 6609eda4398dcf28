//! UI for piped or scripted runs.
//!
//! Output is plain text. Prompts cannot block on a terminal, so every
//! answer must come from a `REDEYE_PROMPT_<KEY>` environment variable:
//! `REDEYE_PROMPT_CONFIRM=yes redeye scan exploit host`.

use std::collections::HashMap;

use crate::error::{RedeyeError, Result};

use super::theme::RedeyeTheme;
use super::{OutputMode, Prompt, PromptKind, SpinnerHandle, UserInterface};

const ANSWER_PREFIX: &str = "REDEYE_PROMPT_";

pub struct NonInteractiveUI {
    mode: OutputMode,
    answers: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Answers taken from the process environment.
    pub fn new(mode: OutputMode) -> Self {
        let answers = std::env::vars()
            .filter_map(|(name, value)| {
                name.strip_prefix(ANSWER_PREFIX)
                    .map(|key| (key.to_ascii_lowercase(), value))
            })
            .collect();
        Self { mode, answers }
    }

    /// Answers keyed by prompt key.
    pub fn with_answers(mode: OutputMode, answers: HashMap<String, String>) -> Self {
        Self { mode, answers }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", RedeyeTheme::plain().format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", RedeyeTheme::plain().format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", RedeyeTheme::plain().format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  Hint: {}", hint);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let Some(answer) = self.answers.get(&prompt.key.to_ascii_lowercase()) else {
            return Err(RedeyeError::InvalidCommand {
                message: format!(
                    "'{}' needs an answer; set {}{} when not on a terminal",
                    prompt.question,
                    ANSWER_PREFIX,
                    prompt.key.to_ascii_uppercase()
                ),
            });
        };

        match prompt.kind {
            PromptKind::Input => Ok(answer.clone()),
            PromptKind::Select(_) => prompt
                .find_option(answer.trim())
                .map(|option| option.value.clone())
                .ok_or_else(|| RedeyeError::InvalidSelection {
                    input: answer.clone(),
                }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n== {} ==\n", title);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!("  command: {}", command);
        for line in output.lines() {
            eprintln!("  | {}", line);
        }
        if let Some(hint) = hint {
            eprintln!("  Hint: {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Prints the outcome line only.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", RedeyeTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", RedeyeTheme::plain().format_error(msg));
    }
}
