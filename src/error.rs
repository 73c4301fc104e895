//! Failures that end an invocation.

use crate::target::EntryKind;

/// Everything that can end an invocation before a program is launched
/// successfully.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No explicit item, no active document and no workspace root.
    #[error("No file or directory selected")]
    NoTarget,

    /// Neither the platform defaults nor the user configured any program.
    #[error("No programs configured")]
    ConfigurationEmpty,

    /// Programs exist, but none of them can open this kind of target.
    #[error("No programs can open a {kind}")]
    NoApplicableProgram {
        /// The kind the registry was filtered for.
        kind: EntryKind,
    },

    /// The chosen entry defines neither a file nor a directory template.
    #[error("{program} has no command for a {kind}")]
    NoUsableTemplate {
        /// Name of the chosen program.
        program: String,
        /// Kind of the target being opened.
        kind: EntryKind,
    },

    /// A preselected program name that is not in the registry.
    #[error("Unknown program: {name}")]
    UnknownProgram {
        /// The name that was asked for.
        name: String,
    },

    /// The program menu could not be shown or answered.
    #[error("Could not read the program choice: {0}")]
    Chooser(String),

    /// The target path cannot be substituted into a command string.
    #[error("Target path contains non-UTF-8 characters")]
    NonUtf8Path,

    /// The configuration could not be read.
    #[error("Failed to load configuration: {0}")]
    Settings(String),

    /// The rendered command failed to spawn or exited unsuccessfully.
    #[error("Failed to open in {program}: {message}")]
    Execution {
        /// Name of the program that was launched.
        program: String,
        /// Underlying error text.
        message: String,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
