//! Colours and status glyphs.

use console::Style;

/// Styles used by [`TerminalUI`](super::TerminalUI) and the profile table.
#[derive(Debug, Clone)]
pub struct RedeyeTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Banner and section headers.
    pub header: Style,
    /// Menu numbers, profile ids and group headings.
    pub key: Style,
    /// Command lines inside error blocks.
    pub command: Style,
    pub border: Style,
    pub hint: Style,
}

impl Default for RedeyeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RedeyeTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().red().bold(),
            key: Style::new().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().yellow().dim(),
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            success: none.clone(),
            warning: none.clone(),
            error: none.clone(),
            header: none.clone(),
            key: none.clone(),
            command: none.clone(),
            border: none.clone(),
            hint: none,
        }
    }

    /// Coloured unless `NO_COLOR`, `--no-color` or a non-terminal stdout
    /// says otherwise.
    pub fn detect() -> Self {
        if colors_wanted() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// `--- title ---` in the header style.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(format!("--- {} ---", title)).to_string()
    }
}

fn colors_wanted() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && console::colors_enabled()
        && console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_lines() {
        let theme = RedeyeTheme::plain();
        assert_eq!(theme.format_success("Scan completed"), "✓ Scan completed");
        assert_eq!(theme.format_warning("Scan cancelled."), "⚠ Scan cancelled.");
        assert_eq!(theme.format_error("Target not set"), "✗ Target not set");
        assert_eq!(
            theme.format_header("Nmap Command Helper"),
            "--- Nmap Command Helper ---"
        );
    }
}
