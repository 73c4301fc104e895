//! One run from "the user asked to open something" to a finished command.
//!
//! Both entry points resolve a [`Target`], filter the registry for its kind,
//! let the user pick a program, render the template and run it. Nothing
//! escapes an invocation: failures are reported through the [`Notifier`] and
//! folded into the returned [`Outcome`].
//!
//! [`Notifier`]: crate::host::Notifier


use std::path::Path;

use crate::error::{Error, Result};
use crate::host::Host;
use crate::registry::{
    build_registry, filter_by_applicability, select_template, Platform, ProgramEntry, Registry,
};
use crate::target::{classify, EntryKind, Selection, Target};
use crate::template::render_command;

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// The command ran and exited successfully.
    Succeeded {
        /// Name of the chosen program.
        program: String,
        /// The command line that was executed.
        command: String,
    },
    /// The user dismissed the program menu.
    Cancelled,
    /// Anything else; already reported to the user.
    Failed(Error),
}

impl Outcome {
    /// `true` for [`Outcome::Failed`].
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Open the current selection, falling back to the active document and then
/// the workspace root.
pub fn open_selected(host: &Host<'_>, selection: &Selection, program: Option<&str>) -> Outcome {
    host.notifier.trace("open selected item");
    let result = selection.resolve().ok_or(Error::NoTarget).and_then(|(path, hint)| {
        let kind = hint.unwrap_or_else(|| classify(path, host.fs, host.notifier));
        let target = Target {
            path: path.to_path_buf(),
            kind,
        };
        launch(host, &target, program, Lookup::Registry)
    });
    finish(host, result)
}

/// Open the workspace root. The root is always treated as a directory, so only
/// programs that can open directories are offered.
pub fn open_workspace_root(host: &Host<'_>, root: Option<&Path>, program: Option<&str>) -> Outcome {
    host.notifier.trace("open workspace root");
    let result = root.ok_or(Error::NoTarget).and_then(|root| {
        let target = Target {
            path: root.to_path_buf(),
            kind: EntryKind::Directory,
        };
        launch(host, &target, program, Lookup::Applicable)
    });
    finish(host, result)
}

/// Where a program named up front is looked up.
#[derive(Debug, Clone, Copy)]
enum Lookup {
    /// The whole registry, so an entry for the other kind can still open the
    /// target through its fallback template.
    Registry,
    /// Only the entries applicable to the target's kind.
    Applicable,
}

/// A command that ran to completion.
struct Launched {
    program: String,
    command: String,
}

fn launch(
    host: &Host<'_>,
    target: &Target,
    preselected: Option<&str>,
    lookup: Lookup,
) -> Result<Option<Launched>> {
    let path = target.path.to_str().ok_or(Error::NonUtf8Path)?;
    host.notifier
        .trace(&format!("target {path} classified as {}", target.kind));

    let config = host
        .settings
        .load()
        .map_err(|e| Error::Settings(format!("{e:#}")))?;
    let registry = build_registry(&config, Platform::current());

    let Some((program, entry)) = pick(host, &registry, target.kind, preselected, lookup)? else {
        return Ok(None);
    };
    let template = select_template(&program, &entry, target.kind)?;
    let command = render_command(template, path, target.kind);

    host.notifier.trace(&format!("Executing command: {command}"));
    host.executor
        .run(&command, config.exec.timeout)
        .map_err(|e| Error::Execution {
            program: program.clone(),
            message: format!("{e:#}"),
        })?;

    Ok(Some(Launched { program, command }))
}

/// The program to launch. A preselected name is looked up according to
/// `lookup`; otherwise the user picks from the entries applicable to `kind`.
/// `None` means the menu was dismissed.
fn pick(
    host: &Host<'_>,
    registry: &Registry,
    kind: EntryKind,
    preselected: Option<&str>,
    lookup: Lookup,
) -> Result<Option<(String, ProgramEntry)>> {
    if let Some(name) = preselected {
        let applicable;
        let pool = match lookup {
            Lookup::Registry if registry.is_empty() => return Err(Error::ConfigurationEmpty),
            Lookup::Registry => registry,
            Lookup::Applicable => {
                applicable = filter_by_applicability(registry, kind)?;
                &applicable
            }
        };
        let found = pool.get_key_value(name).or_else(|| {
            pool.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
        });
        return found
            .map(|(key, entry)| Some((key.clone(), entry.clone())))
            .ok_or_else(|| Error::UnknownProgram {
                name: name.to_string(),
            });
    }

    let candidates = filter_by_applicability(registry, kind)?;
    let labels: Vec<&str> = candidates.keys().map(String::as_str).collect();
    let choice = host
        .chooser
        .choose("Open with", &labels)
        .map_err(|e| Error::Chooser(format!("{e:#}")))?;
    Ok(choice
        .and_then(|i| candidates.get_index(i))
        .map(|(key, entry)| (key.clone(), entry.clone())))
}

fn finish(host: &Host<'_>, result: Result<Option<Launched>>) -> Outcome {
    match result {
        Ok(Some(Launched { program, command })) => {
            host.notifier.info(&format!("Opened in {program}"));
            Outcome::Succeeded { program, command }
        }
        Ok(None) => {
            host.notifier.trace("selection cancelled");
            Outcome::Cancelled
        }
        Err(Error::ConfigurationEmpty) => {
            host.notifier.error(&format!(
                "{}. Add one to your settings, e.g.\n\n[programs]\nCursor = 'cursor \"${{item}}\"'",
                Error::ConfigurationEmpty
            ));
            offer_settings(host);
            Outcome::Failed(Error::ConfigurationEmpty)
        }
        Err(e) => {
            host.notifier.error(&e.to_string());
            Outcome::Failed(e)
        }
    }
}

fn offer_settings(host: &Host<'_>) {
    match host.chooser.choose("Configure programs now?", &["Open settings"]) {
        Ok(Some(_)) => {
            if let Err(e) = host.settings.open() {
                host.notifier
                    .error(&format!("Failed to open settings: {e:#}"));
            }
        }
        Ok(None) => {}
        Err(e) => host.notifier.trace(&format!("could not read choice: {e:#}")),
    }
}
