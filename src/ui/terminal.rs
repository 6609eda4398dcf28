//! UI for a real terminal.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompts, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, RedeyeTheme, SpinnerHandle,
    UserInterface,
};

/// Coloured output on stdout with dialoguer prompts.
pub struct TerminalUI {
    term: Term,
    theme: RedeyeTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: RedeyeTheme::detect(),
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn status(&mut self, text: &str) {
        if self.mode.shows_status() {
            self.line(text);
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.status(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.status(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.status(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.line(&line);
    }

    fn show_hint(&mut self, hint: &str) {
        let line = format!("  {}", self.theme.hint.apply_to(hint));
        self.status(&line);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompts::ask(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        let line = format!("\n{}", self.theme.format_header(title));
        self.status(&line);
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        let bar = self.theme.border.apply_to("│").to_string();
        let top = self.theme.border.apply_to("┌─ command").to_string();
        let bottom = self.theme.border.apply_to("└─").to_string();
        let command = self.theme.command.apply_to(command).to_string();

        self.line(&format!("    {}", top));
        self.line(&format!("    {} {}", bar, command));
        for output_line in output.lines() {
            self.line(&format!("    {} {}", bar, output_line));
        }
        self.line(&format!("    {}", bottom));
        if let Some(hint) = hint {
            let hint = self.theme.hint.apply_to(format!("Hint: {}", hint)).to_string();
            self.line(&format!("    {}", hint));
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// [`TerminalUI`] when `interactive` and stdout is a terminal, otherwise
/// [`NonInteractiveUI`].
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_request_gets_plain_ui() {
        let ui = create_ui(false, OutputMode::Silent);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn mode_can_change_after_creation() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }
}
