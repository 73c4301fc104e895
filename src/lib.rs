//! Open files and directories with external programs described by shell
//! command templates.
//!
//! The [`registry`] merges built-in programs with the user's [`config`],
//! [`template`] substitutes the target path, and [`invocation`] drives one
//! run against the collaborators in [`host`].

pub mod config;
pub mod error;
pub mod host;
pub mod invocation;
pub mod logging;
pub mod opener;
pub mod prompt;
pub mod registry;
pub mod settings;
pub mod target;
pub mod template;

pub use config::Config;
pub use error::Error;
pub use registry::{ProgramEntry, Registry};
pub use target::{EntryKind, Selection, Target};
