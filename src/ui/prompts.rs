//! dialoguer-backed prompts for [`TerminalUI`](super::TerminalUI).

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{RedeyeError, Result};

use super::{Prompt, PromptKind, PromptOption};

/// Menus longer than this scroll.
const MENU_PAGE: usize = 15;

fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    }
}

fn io_error(e: dialoguer::Error) -> RedeyeError {
    RedeyeError::Io(e.into())
}

/// Ask on `term` and return the answer text or the chosen option value.
pub fn ask(prompt: &Prompt, term: &Term) -> Result<String> {
    match &prompt.kind {
        PromptKind::Input => Input::<String>::with_theme(&prompt_theme())
            .with_prompt(&prompt.question)
            .allow_empty(true)
            .interact_text_on(term)
            .map_err(io_error),
        PromptKind::Select(options) => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            let index = Select::with_theme(&prompt_theme())
                .with_prompt(&prompt.question)
                .items(&labels)
                .default(0)
                .max_length(MENU_PAGE)
                .interact_on(term)
                .map_err(io_error)?;
            chosen_value(options, index)
        }
    }
}

fn chosen_value(options: &[PromptOption], index: usize) -> Result<String> {
    options
        .get(index)
        .map(|option| option.value.clone())
        .ok_or_else(|| RedeyeError::InvalidSelection {
            input: index.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chosen_value_maps_index_to_value() {
        let options = vec![
            PromptOption::new("3", "3.  Fast Scan"),
            PromptOption::new("0", "0.  Exit"),
        ];
        assert_eq!(chosen_value(&options, 1).unwrap(), "0");
        assert!(chosen_value(&options, 2).is_err());
    }
}
