//! External process execution and host privilege detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    display_command, execute, CommandOptions, CommandResult, ProcessRunner, SystemRunner,
};
pub use mock::MockRunner;
pub use platform::{is_ci, is_elevated};
