//! Named program entries: built-in defaults, merging, and selection by
//! target kind.

mod defaults;


use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::target::EntryKind;

pub use defaults::{default_programs, Platform};

/// Program name to entry, in presentation order.
pub type Registry = IndexMap<String, ProgramEntry>;

/// How to launch one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramEntry {
    /// One template used for files and directories alike.
    Plain(String),
    /// Separate templates per target kind.
    PerKind(KindTemplates),
}

/// The `{ file, directory }` form of a [`ProgramEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindTemplates {
    /// Template used when the target is a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Template used when the target is a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl KindTemplates {
    /// Template declared for `kind`, if any.
    pub fn get(&self, kind: EntryKind) -> Option<&str> {
        match kind {
            EntryKind::File => self.file.as_deref(),
            EntryKind::Directory => self.directory.as_deref(),
        }
    }

    /// Mutable slot for `kind`.
    pub fn slot_mut(&mut self, kind: EntryKind) -> &mut Option<String> {
        match kind {
            EntryKind::File => &mut self.file,
            EntryKind::Directory => &mut self.directory,
        }
    }
}

impl ProgramEntry {
    /// Whether the entry should be offered for a target of `kind`.
    pub fn applies_to(&self, kind: EntryKind) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::PerKind(t) => t.get(kind).is_some(),
        }
    }

    /// The template to render for `kind`: the matching one, else the other
    /// kind's template, else `None`.
    pub fn template_for(&self, kind: EntryKind) -> Option<&str> {
        match self {
            Self::Plain(t) => Some(t.as_str()),
            Self::PerKind(t) => t.get(kind).or_else(|| t.get(kind.opposite())),
        }
    }
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(t) => f.write_str(t),
            Self::PerKind(t) => {
                let mut first = true;
                for kind in [EntryKind::File, EntryKind::Directory] {
                    if let Some(tpl) = t.get(kind) {
                        if !first {
                            f.write_str(", ")?;
                        }
                        write!(f, "{kind}: {tpl}")?;
                        first = false;
                    }
                }
                if first {
                    f.write_str("(no templates)")?;
                }
                Ok(())
            }
        }
    }
}

/// Shallow merge where `overrides` replace whole entries of `defaults`.
///
/// Overridden names keep the position they had in `defaults`; names only
/// present in `overrides` are appended in their own order.
pub fn merge_registries(defaults: &Registry, overrides: &Registry) -> Registry {
    let mut merged = defaults.clone();
    for (name, entry) in overrides {
        merged.insert(name.clone(), entry.clone());
    }
    merged
}

/// The registry an invocation works from, given the current configuration.
pub fn build_registry(config: &Config, platform: Platform) -> Registry {
    if config.defaults.enabled {
        merge_registries(&default_programs(platform), &config.programs)
    } else {
        config.programs.clone()
    }
}

/// Entries that can open a target of `kind`.
///
/// An empty `registry` is [`Error::ConfigurationEmpty`]; a non-empty one with
/// nothing applicable is [`Error::NoApplicableProgram`].
pub fn filter_by_applicability(registry: &Registry, kind: EntryKind) -> Result<Registry> {
    if registry.is_empty() {
        return Err(Error::ConfigurationEmpty);
    }
    let filtered: Registry = registry
        .iter()
        .filter(|(_, entry)| entry.applies_to(kind))
        .map(|(name, entry)| (name.clone(), entry.clone()))
        .collect();
    if filtered.is_empty() {
        return Err(Error::NoApplicableProgram { kind });
    }
    Ok(filtered)
}

/// Pick the template of `program`'s entry for a target of `kind`.
pub fn select_template<'a>(
    program: &str,
    entry: &'a ProgramEntry,
    kind: EntryKind,
) -> Result<&'a str> {
    entry
        .template_for(kind)
        .ok_or_else(|| Error::NoUsableTemplate {
            program: program.to_string(),
            kind,
        })
}
