//! The facilities an invocation borrows from whoever drives it.

use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::target::FileSystem;

/// Sink for user-facing notifications and diagnostic traces.
pub trait Notifier {
    /// Something the user should see, e.g. which program was opened.
    fn info(&self, message: &str);
    /// A failure the user should see.
    fn error(&self, message: &str);
    /// Diagnostics that are only interesting when debugging.
    fn trace(&self, message: &str);
}

/// Interactive pick from a list of labels.
pub trait Chooser {
    /// Index of the chosen label, or `None` when the user dismissed the
    /// prompt.
    fn choose(&self, prompt: &str, labels: &[&str]) -> Result<Option<usize>>;
}

/// Runs a rendered command line.
pub trait Executor {
    /// Run `command` in the platform shell and wait for it. With a
    /// `timeout`, the command is killed once it elapses.
    fn run(&self, command: &str, timeout: Option<Duration>) -> Result<()>;
}

/// Where the configuration lives.
pub trait Settings {
    /// Read the current configuration.
    fn load(&self) -> Result<Config>;
    /// Let the user edit the configuration.
    fn open(&self) -> Result<()>;
}

/// Every collaborator of an invocation.
#[derive(Clone, Copy)]
pub struct Host<'a> {
    /// File-system stat queries.
    pub fs: &'a dyn FileSystem,
    /// Configuration store.
    pub settings: &'a dyn Settings,
    /// Program picker.
    pub chooser: &'a dyn Chooser,
    /// Command runner.
    pub executor: &'a dyn Executor,
    /// Notifications and traces.
    pub notifier: &'a dyn Notifier,
}

/// [`Notifier`] printing notifications to stderr and traces to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        tracing::debug!(target: "open_in::notify", "{message}");
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::debug!(target: "open_in::notify", error = true, "{message}");
        eprintln!("Error: {message}");
    }

    fn trace(&self, message: &str) {
        tracing::debug!("{message}");
    }
}
