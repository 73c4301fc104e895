use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{Config, DefaultsConfig, ExecConfig, CONFIG_ENV};
use crate::registry::{KindTemplates, ProgramEntry};
use crate::target::EntryKind;

impl Config {
    /// Location of the configuration file: `$OPEN_IN_CONFIG`, or
    /// `~/.config/open-in/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("open-in").join("config.toml"))
    }

    /// Load the configuration file, or the defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to the configuration file, creating its directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to an explicit path, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Render as TOML. Each program is written on one line, per-kind entries as
    /// inline tables, so the program order survives a save.
    pub fn to_toml(&self) -> Result<String> {
        let mut out = toml::to_string_pretty(&Scalars {
            defaults: &self.defaults,
            exec: &self.exec,
        })
        .context("Failed to serialize config")?;
        if self.programs.is_empty() {
            return Ok(out);
        }
        out.push_str("\n[programs]\n");
        for (name, entry) in &self.programs {
            let value = toml::Value::try_from(entry)
                .with_context(|| format!("Failed to serialize program {name}"))?;
            out.push_str(&format!("{} = {value}\n", toml_key(name)));
        }
        Ok(out)
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "defaults.enabled" => return Ok(self.defaults.enabled.to_string()),
            "exec.timeout" => {
                return Ok(self
                    .exec
                    .timeout
                    .map(|t| humantime::format_duration(t).to_string())
                    .unwrap_or_default())
            }
            _ => {}
        }
        let Some((name, kind)) = parse_program_key(key) else {
            bail!("Unknown config key: {key}");
        };
        let value = match (self.programs.get(name), kind) {
            (None, _) => None,
            (Some(entry), None) => Some(entry.to_string()),
            (Some(ProgramEntry::Plain(t)), Some(_)) => Some(t.clone()),
            (Some(ProgramEntry::PerKind(t)), Some(kind)) => t.get(kind).map(str::to_string),
        };
        Ok(value.unwrap_or_default())
    }

    /// Set a config value by dot-separated key path. An empty value clears
    /// the key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.enabled" => {
                self.defaults.enabled = value.parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
                return Ok(());
            }
            "exec.timeout" => {
                self.exec.timeout = if value.is_empty() {
                    None
                } else {
                    Some(humantime::parse_duration(value)
                        .with_context(|| format!("Invalid duration: {value}"))?)
                };
                return Ok(());
            }
            _ => {}
        }
        let Some((name, kind)) = parse_program_key(key) else {
            bail!("Unknown config key: {key}");
        };
        match kind {
            None if value.is_empty() => {
                self.programs.shift_remove(name);
            }
            None => {
                self.programs
                    .insert(name.to_string(), ProgramEntry::Plain(value.to_string()));
            }
            Some(kind) => self.set_kind_template(name, kind, value),
        }
        Ok(())
    }

    fn set_kind_template(&mut self, name: &str, kind: EntryKind, value: &str) {
        let mut templates = match self.programs.get(name) {
            Some(ProgramEntry::PerKind(t)) => t.clone(),
            // A plain entry served both kinds; keep it for the other one.
            Some(ProgramEntry::Plain(t)) => {
                let mut split = KindTemplates::default();
                *split.slot_mut(kind.opposite()) = Some(t.clone());
                split
            }
            None => KindTemplates::default(),
        };
        *templates.slot_mut(kind) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        if templates.file.is_none() && templates.directory.is_none() {
            self.programs.shift_remove(name);
        } else if let Some(entry) = self.programs.get_mut(name) {
            *entry = ProgramEntry::PerKind(templates);
        } else {
            self.programs
                .insert(name.to_string(), ProgramEntry::PerKind(templates));
        }
    }
}

/// Everything but `[programs]`, which [`Config::to_toml`] writes itself.
#[derive(Serialize)]
struct Scalars<'a> {
    defaults: &'a DefaultsConfig,
    exec: &'a ExecConfig,
}

/// Bare key when TOML allows one, quoted otherwise (`"VS Code"`).
fn toml_key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        name.to_string()
    } else {
        toml::Value::String(name.to_string()).to_string()
    }
}

/// Split `programs.<NAME>[.file|.directory]`.
fn parse_program_key(key: &str) -> Option<(&str, Option<EntryKind>)> {
    let rest = key.strip_prefix("programs.")?;
    let (name, kind) = if let Some(name) = rest.strip_suffix(".file") {
        (name, Some(EntryKind::File))
    } else if let Some(name) = rest.strip_suffix(".directory") {
        (name, Some(EntryKind::Directory))
    } else {
        (rest, None)
    };
    (!name.is_empty()).then_some((name, kind))
}
