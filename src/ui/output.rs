//! Output verbosity.

use crate::config::schema::OutputMode as ConfigOutputMode;

/// How much RedEye prints. Errors are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status plus captured installer output.
    Verbose,
    #[default]
    Normal,
    /// Status lines, no captured tool output.
    Quiet,
    /// Errors only.
    Silent,
}

impl From<ConfigOutputMode> for OutputMode {
    fn from(mode: ConfigOutputMode) -> Self {
        match mode {
            ConfigOutputMode::Verbose => Self::Verbose,
            ConfigOutputMode::Normal => Self::Normal,
            ConfigOutputMode::Quiet => Self::Quiet,
            ConfigOutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Whether captured stdout of package manager runs is echoed.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Whether messages, warnings and hints are printed.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verbose_echoes_tool_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
        assert!(!OutputMode::Silent.shows_command_output());
    }

    #[test]
    fn silent_hides_status_and_spinners() {
        for mode in [OutputMode::Verbose, OutputMode::Normal, OutputMode::Quiet] {
            assert!(mode.shows_status());
            assert!(mode.shows_spinners());
        }
        assert!(!OutputMode::Silent.shows_status());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn config_modes_map_one_to_one() {
        let cases = [
            (ConfigOutputMode::Verbose, OutputMode::Verbose),
            (ConfigOutputMode::Normal, OutputMode::Normal),
            (ConfigOutputMode::Quiet, OutputMode::Quiet),
            (ConfigOutputMode::Silent, OutputMode::Silent),
        ];
        for (config, expected) in cases {
            assert_eq!(OutputMode::from(config), expected);
        }
    }
}
