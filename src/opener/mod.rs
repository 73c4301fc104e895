//! Running rendered commands.

mod shell;

pub use shell::augmented_path;

use anyhow::Result;
use std::time::Duration;

use crate::host::Executor;

/// [`Executor`] that hands the command line to the platform shell
/// (`sh -c` or `cmd /C`) and waits for it to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&self, command: &str, timeout: Option<Duration>) -> Result<()> {
        shell::run_shell_command(command, timeout)
    }
}
