//! The settings store backed by the config file.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::host::Settings;

/// Written by [`FileSettings::open`] when there is no config file yet.
pub const STARTER_CONFIG: &str = r#"# open-in configuration
#
# Each program is either one command for files and directories:
#
#   [programs]
#   Cursor = 'cursor "${item}"'
#
# or separate commands per kind:
#
#   [programs.Reveal]
#   file = 'open -R "${item}"'
#   directory = 'open "${item}"'
#
# ${item} is replaced with the selected path, unquoted.

[defaults]
enabled = true

[programs]
"#;

/// [`Settings`] stored in a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Settings at an explicit location.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings at [`Config::path`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::path()?))
    }

    /// The file backing these settings.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write [`STARTER_CONFIG`] unless the file already exists. Returns
    /// whether it was written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        std::fs::write(&self.path, STARTER_CONFIG)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;
        Ok(true)
    }
}

impl Settings for FileSettings {
    fn load(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }

    fn open(&self) -> Result<()> {
        self.ensure_exists()?;
        let editor = editor_command();
        tracing::debug!(%editor, path = %self.path.display(), "editing settings");

        let mut parts = editor.split_whitespace();
        let program = parts.next().context("Empty editor command")?;
        let status = Command::new(program)
            .args(parts)
            .arg(&self.path)
            .status()
            .with_context(|| format!("Failed to launch editor: {editor}"))?;
        if !status.success() {
            bail!("Editor exited with error: {status}");
        }
        Ok(())
    }
}

/// `$VISUAL`, then `$EDITOR`, then a platform fallback.
fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
}
