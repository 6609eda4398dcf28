//! Recording process runner for tests.
//!
//! # Example
//!
//! ```
//! use redeye::shell::{CommandOptions, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.queue_exit_codes(vec![1]);
//!
//! let argv = vec!["nmap".to_string(), "-sn".to_string(), "10.0.0.1".to_string()];
//! let first = runner.run(&argv, &CommandOptions::inherit()).unwrap();
//! let second = runner.run(&argv, &CommandOptions::inherit()).unwrap();
//!
//! assert_eq!(first.exit_code, Some(1));
//! assert!(second.success);
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::Result;

use super::command::{CommandOptions, CommandResult, ProcessRunner};

/// Records every argument vector instead of spawning it.
///
/// Exit codes are taken from a queue, then fall back to the default
/// (0 unless built with [`MockRunner::failing`]).
#[derive(Debug, Default)]
pub struct MockRunner {
    calls: RefCell<Vec<Vec<String>>>,
    exit_codes: RefCell<VecDeque<i32>>,
    default_exit: i32,
    stderr: String,
}

impl MockRunner {
    /// A runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner where every command exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            default_exit: code,
            ..Default::default()
        }
    }

    /// Captured stderr returned for failing commands.
    pub fn with_stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }

    /// Queue exit codes for the next commands, in order.
    pub fn queue_exit_codes(&self, codes: Vec<i32>) {
        self.exit_codes.borrow_mut().extend(codes);
    }

    /// Every argument vector run so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The most recent argument vector.
    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.borrow().last().cloned()
    }

    /// Whether any recorded command started with `program`.
    pub fn ran(&self, program: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| c.first().is_some_and(|p| p == program))
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
        self.calls.borrow_mut().push(argv.to_vec());
        let code = self
            .exit_codes
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.default_exit);

        if code == 0 {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
            ))
        } else {
            let stderr = if options.capture_stderr {
                self.stderr.clone()
            } else {
                String::new()
            };
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                stderr,
            ))
        }
    }
}
