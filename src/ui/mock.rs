//! Recording UI for tests.
//!
//! ```
//! use redeye::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("target", "10.0.0.5");
//!
//! let target = ui.prompt(&Prompt::input("target", "Target?")).unwrap();
//! ui.success(&format!("Target set to: {}", target));
//!
//! assert!(ui.has_success("10.0.0.5"));
//! ```

use std::collections::{HashMap, VecDeque};
use std::io;

use crate::error::{RedeyeError, Result};

use super::{OutputMode, Prompt, PromptKind, SpinnerHandle, UserInterface};

/// Records everything shown and answers prompts from canned responses.
///
/// Answers are looked up by prompt key: the queue for that key first, then
/// the fixed response. An unanswered text prompt reads as blank; an
/// unanswered menu behaves like a closed stdin, which ends menu loops.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    error_blocks: Vec<(String, String, Option<String>)>,
    fixed: HashMap<String, String>,
    queued: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every prompt with this key the same way.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.fixed.insert(key.to_string(), response.to_string());
    }

    /// Answer successive prompts with this key in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.queued.insert(
            key.to_string(),
            responses.into_iter().map(String::from).collect(),
        );
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// `(command, output, hint)` per error block.
    pub fn error_blocks(&self) -> &[(String, String, Option<String>)] {
        &self.error_blocks
    }

    /// Prompt keys in the order they were asked.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, needle: &str) -> bool {
        contains(&self.messages, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        contains(&self.successes, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        contains(&self.warnings, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        contains(&self.errors, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        contains(&self.hints, needle)
    }
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        let queued = self
            .queued
            .get_mut(&prompt.key)
            .and_then(VecDeque::pop_front);
        if let Some(answer) = queued.or_else(|| self.fixed.get(&prompt.key).cloned()) {
            return Ok(answer);
        }

        match prompt.kind {
            PromptKind::Input => Ok(String::new()),
            PromptKind::Select(_) => Err(RedeyeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer for '{}'", prompt.key),
            ))),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(SilentSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.error_blocks
            .push((command.to_string(), output.to_string(), hint.map(String::from)));
        self.errors.push(command.to_string());
        if !output.is_empty() {
            self.messages.push(output.to_string());
        }
        if let Some(hint) = hint {
            self.hints.push(hint.to_string());
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn menu() -> Prompt {
        Prompt::select("menu", "Enter your choice", vec![PromptOption::new("1", "1. Target")])
    }

    #[test]
    fn queue_then_fixed_then_eof() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("menu", vec!["1", "2"]);
        ui.set_prompt_response("menu", "0");

        assert_eq!(ui.prompt(&menu()).unwrap(), "1");
        assert_eq!(ui.prompt(&menu()).unwrap(), "2");
        assert_eq!(ui.prompt(&menu()).unwrap(), "0");

        let mut bare = MockUI::new();
        match bare.prompt(&menu()) {
            Err(RedeyeError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected eof, got {other:?}"),
        }
    }

    #[test]
    fn unanswered_input_is_blank() {
        let mut ui = MockUI::new();
        let answer = ui.prompt(&Prompt::input("session", "Session?")).unwrap();
        assert_eq!(answer, "");
        assert_eq!(ui.prompts_shown(), &["session"]);
    }

    #[test]
    fn error_block_lands_in_errors_messages_and_hints() {
        let mut ui = MockUI::new();
        ui.show_error_block("xsltproc -o a.html a.xml", "no such file", Some("install it"));

        assert_eq!(ui.error_blocks().len(), 1);
        assert!(ui.has_error("xsltproc"));
        assert!(ui.has_message("no such file"));
        assert!(ui.has_hint("install it"));
    }
}
