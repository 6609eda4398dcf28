//! External process execution.
//!
//! Every tool RedEye drives (scanner, diff, transform, package manager) is
//! spawned directly from an argument vector. Nothing goes through a shell,
//! so profile arguments such as `smb-vuln*` reach the scanner untouched.

use crate::error::{RedeyeError, Result};
use std::process::{Command, Stdio};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Which streams of the child are read back instead of shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Live output: the child shares the terminal, stdin included.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Capture both streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
        }
    }

    fn is_live(&self) -> bool {
        !self.capture_stdout && !self.capture_stderr
    }
}

/// Seam between RedEye's orchestration logic and the operating system.
///
/// Production code uses [`SystemRunner`]; tests substitute
/// [`MockRunner`](super::MockRunner) to record argument vectors.
pub trait ProcessRunner {
    /// Spawn `argv[0]` with the remaining arguments and wait for it.
    fn run(&self, argv: &[String], options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs commands on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
        execute(argv, options)
    }
}

/// Render an argument vector the way a user would type it.
pub fn display_command(argv: &[String]) -> String {
    shell_words::join(argv)
}

/// Execute an argument vector.
pub fn execute(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let Some((program, args)) = argv.split_first() else {
        return Err(RedeyeError::InvalidCommand {
            message: "empty command".to_string(),
        });
    };

    tracing::debug!("Executing: {}", display_command(argv));

    let mut cmd = Command::new(program);
    cmd.args(args);

    let spawn_failed = |e: std::io::Error| {
        tracing::debug!("Failed to spawn {}: {}", program, e);
        RedeyeError::SpawnFailed {
            command: display_command(argv),
            message: e.to_string(),
        }
    };

    // Live scans keep the terminal's stdin so the scanner's runtime keys work.
    if options.is_live() {
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(spawn_failed)?;
        return Ok(if status.success() {
            CommandResult::success(String::new(), String::new())
        } else {
            CommandResult::failure(status.code(), String::new(), String::new())
        });
    }

    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    let output = cmd.output().map_err(spawn_failed)?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).trim().to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}
