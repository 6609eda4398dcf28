//! Terminal output and prompts.
//!
//! Everything RedEye prints or asks goes through [`UserInterface`]:
//! [`TerminalUI`] on a real terminal, [`NonInteractiveUI`] when output is
//! piped (answers come from `REDEYE_PROMPT_<KEY>`), and [`MockUI`] in tests.
//!
//! ```
//! use redeye::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("RedEye");
//! ui.success("All required tools are present");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::RedeyeTheme;

use crate::error::Result;

/// Output and input seam between commands and the terminal.
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    fn set_output_mode(&mut self, mode: OutputMode);

    /// Plain line on stdout.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Shown in every output mode.
    fn error(&mut self, msg: &str);

    fn show_hint(&mut self, hint: &str);

    /// Ask a question and return the raw answer. For a menu this is the
    /// chosen option's value.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    fn show_header(&mut self, title: &str);

    /// A failed tool run: the command line, what it printed, and a hint.
    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>);

    fn is_interactive(&self) -> bool;
}

/// Outcome reporting for a running spinner.
pub trait SpinnerHandle {
    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);
}

/// A question for the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Stable id; scripted answers are looked up by it.
    pub key: String,
    pub question: String,
    pub kind: PromptKind,
}

impl Prompt {
    /// Free text. Blank answers are allowed.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            kind: PromptKind::Input,
        }
    }

    /// Pick one of `options`.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            kind: PromptKind::Select(options),
        }
    }

    /// The option whose value or label matches `answer`, for scripted input.
    pub fn find_option(&self, answer: &str) -> Option<&PromptOption> {
        match &self.kind {
            PromptKind::Select(options) => options
                .iter()
                .find(|o| o.value == answer || o.label == answer),
            PromptKind::Input => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PromptKind {
    Input,
    Select(Vec<PromptOption>),
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    /// Returned by [`UserInterface::prompt`] when chosen.
    pub value: String,
    pub label: String,
}

impl PromptOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}
