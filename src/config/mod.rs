//! The `config.toml` file: user programs and execution settings.

mod ops;

#[cfg(test)]
mod tests;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::registry::Registry;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "OPEN_IN_CONFIG";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the platform defaults are offered.
    pub defaults: DefaultsConfig,
    /// Process execution settings.
    pub exec: ExecConfig,
    /// User programs; these replace defaults of the same name.
    pub programs: Registry,
}

/// The `[defaults]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Merge the built-in programs for this platform under `[programs]`.
    pub enabled: bool,
}

/// The `[exec]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Kill the launched command after this long, e.g. `"30s"`. Unset waits
    /// for as long as the command runs.
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
