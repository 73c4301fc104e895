mod paths;

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use open_in::{
    host::{ConsoleNotifier, Host},
    invocation::{self, Outcome},
    opener::ShellExecutor,
    prompt::PromptChooser,
    settings::FileSettings,
    target::{Selection, StdFileSystem},
    EntryKind,
};

/// Where `open` looks for its target.
pub struct OpenRequest {
    pub path: Option<PathBuf>,
    pub kind: Option<EntryKind>,
    pub active: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
}

pub fn cmd_open(request: OpenRequest, program: Option<&str>) -> Result<ExitCode> {
    let selection = Selection {
        item: request.path.map(paths::absolute).transpose()?,
        kind_hint: request.kind,
        active_document: request.active.map(paths::absolute).transpose()?,
        workspace_root: paths::workspace_root(request.workspace)?,
    };

    let settings = FileSettings::from_env()?;
    let outcome = invocation::open_selected(&host(&settings), &selection, program);
    Ok(exit_code(&outcome))
}

pub fn cmd_root(workspace: Option<PathBuf>, program: Option<&str>) -> Result<ExitCode> {
    let root = paths::workspace_root(workspace)?;

    let settings = FileSettings::from_env()?;
    let outcome = invocation::open_workspace_root(&host(&settings), root.as_deref(), program);
    Ok(exit_code(&outcome))
}

fn host(settings: &FileSettings) -> Host<'_> {
    Host {
        fs: &StdFileSystem,
        settings,
        chooser: &PromptChooser,
        executor: &ShellExecutor,
        notifier: &ConsoleNotifier,
    }
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
